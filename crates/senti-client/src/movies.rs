/// Titles offered for review.
pub const MOVIES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Forrest Gump",
    "Inception",
    "Fight Club",
    "Interstellar",
    "The Matrix",
    "Parasite",
];

/// Case-insensitive lookup of a listed title.
pub fn find_movie(name: &str) -> Option<&'static str> {
    let name = name.trim();
    MOVIES
        .iter()
        .copied()
        .find(|movie| movie.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_movie_ignores_case() {
        assert_eq!(find_movie("the matrix"), Some("The Matrix"));
        assert_eq!(find_movie("  PARASITE "), Some("Parasite"));
        assert_eq!(find_movie("Cats"), None);
    }
}
