use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid html tag pattern"));

// Character classes are spelled out: `\w` and `\s` alone disagree with the
// vocabulary's word and space definitions on combining marks, numeric
// symbols like `²` and the `\x1c`-`\x1f` separators.
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)http[^\s\x1c-\x1f]+|www[^\s\x1c-\x1f]+|https[^\s\x1c-\x1f]+")
        .expect("valid url pattern")
});

static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x1c-\x1f!?.,]").expect("valid punctuation pattern")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").expect("valid whitespace pattern"));

/// Literal replacements applied in order by [`expand_contractions`].
pub const CONTRACTIONS: [(&str, &str); 7] = [
    ("n't", " not"),
    ("'ll", " will"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'m", " am"),
    ("'d", " would"),
    ("'s", " is"),
];

/// Lowercase, strip markup and links, restrict punctuation to `! ? . ,`
/// and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = HTML_TAG.replace_all(&text, "");
    let text = URL.replace_all(&text, "");
    let text = DISALLOWED.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}

/// Replace every occurrence of each contraction with its expansion.
///
/// Not word-boundary aware: `"won't"` becomes `"wo not"`.
pub fn expand_contractions(text: &str) -> String {
    CONTRACTIONS
        .iter()
        .fold(text.to_string(), |acc, (contraction, expansion)| {
            acc.replace(contraction, expansion)
        })
}

/// Full pipeline fed to the tokenizer.
///
/// Contractions are expanded *after* [`clean_text`] has already dropped the
/// apostrophe, so the expansion step never fires on its output
/// (`"isn't great"` normalizes to `"isnt great"`). Downstream vocabularies
/// were built against this output, so the order is kept as is.
pub fn normalize(text: &str) -> String {
    expand_contractions(&clean_text(text))
}

pub trait Preprocessor: Send + Sync {
    // Default sentiment preprocessor
    fn process(&self, text: &str) -> String {
        normalize(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_strips_html_tags() {
        assert_eq!(normalize("<b>Great!</b>"), "great!");
        assert_eq!(normalize("<p class=\"x\">Nice</p> film"), "nice film");
    }

    #[test]
    fn test_unmatched_angle_bracket_is_not_a_tag() {
        // `<` survives tag stripping, then falls to the punctuation filter
        assert_eq!(normalize("a < b"), "a b");
        assert_eq!(normalize("<>"), "");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(normalize("Visit http://example.com now"), "visit now");
        assert_eq!(normalize("see www.example.org, ok"), "see ok");
        assert_eq!(
            normalize("first https://a.io/x\nsecond http://b.io"),
            "first second"
        );
    }

    #[test]
    fn test_bare_http_word_is_kept() {
        assert_eq!(normalize("http is a protocol"), "http is a protocol");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize("  Multiple   spaces   here  "),
            "multiple spaces here"
        );
        assert_eq!(normalize("line\none\r\n\ttwo"), "line one two");
    }

    #[test]
    fn test_keeps_sentence_punctuation_only() {
        assert_eq!(
            normalize("Wow!!! Really? Yes... (maybe); #1 @home"),
            "wow!!! really? yes... maybe 1 home"
        );
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
    }

    #[test]
    fn test_apostrophe_removed_before_expansion() {
        assert_eq!(normalize("isn't great"), "isnt great");
        assert_eq!(normalize("I'll say they're fine"), "ill say theyre fine");
    }

    #[test]
    fn test_expand_contractions_on_raw_text() {
        assert_eq!(expand_contractions("isn't"), "is not");
        assert_eq!(expand_contractions("we'll"), "we will");
        assert_eq!(expand_contractions("you're"), "you are");
        assert_eq!(expand_contractions("i've"), "i have");
        assert_eq!(expand_contractions("i'm"), "i am");
        assert_eq!(expand_contractions("she'd"), "she would");
        assert_eq!(expand_contractions("it's"), "it is");
        assert_eq!(expand_contractions("won't"), "wo not");
    }

    #[test]
    fn test_output_alphabet() {
        let raw = "Hello, <i>World</i>! Price: $30 (50% off) -- 'quoted' & more? \
                   See https://shop.example/deal?id=7 or email me@example.com.";
        let out = normalize(raw);
        assert_allowed_alphabet(&out);
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }

    fn assert_allowed_alphabet(out: &str) {
        assert!(
            out.chars().all(|c| (c.is_alphabetic() && !c.is_uppercase())
                || c.is_numeric()
                || matches!(c, '_' | ' ' | '!' | '?' | '.' | ',')),
            "unexpected character in {out:?}"
        );
    }

    #[test]
    fn test_output_alphabet_non_ascii() {
        let samples = [
            "Cafe\u{301} review",
            "a\u{1f}b",
            "x² stars",
            "Ünïcödé — “quotes” ☺ 東京\u{3000}タワー",
            "Şahane\u{0327}!\u{200b}ok",
        ];
        for raw in samples {
            let out = normalize(raw);
            assert_allowed_alphabet(&out);
            assert!(!out.contains("  "), "double space in {out:?}");
        }
    }

    #[test]
    fn test_unicode_word_and_space_classes() {
        // combining marks are dropped, not kept as part of the word
        assert_eq!(normalize("Cafe\u{301} review"), "cafe review");
        // information separators count as whitespace
        assert_eq!(normalize("a\u{1f}b"), "a b");
        assert_eq!(normalize("a\u{1c}\u{1d}\u{1e}b"), "a b");
        // numeric symbols are kept like digits
        assert_eq!(normalize("x² stars"), "x² stars");
        assert_eq!(normalize("Crème brûlée"), "crème brûlée");
        // a separator ends a link just like a space
        assert_eq!(normalize("see http://a.io\u{1f}now"), "see now");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "<b>Great!</b>",
            "Visit http://example.com now",
            "  Multiple   spaces   here  ",
            "isn't great",
            "The movie was AMAZING!!! 10/10, would watch again.",
            "Terrible... <br/><br/>Worst film www.bad.com ever?",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_default_preprocessor_matches_normalize() {
        let raw = "It's <em>SO</em> good";
        assert_eq!(DefaultPreprocessor.process(raw), normalize(raw));
    }
}
