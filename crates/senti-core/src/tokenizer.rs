use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Characters turned into separators before splitting into words.
pub const WORD_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Phrases fitted when no saved vocabulary exists yet.
pub const DEMO_CORPUS: [&str; 10] = [
    "this is a great movie",
    "terrible film",
    "amazing performance",
    "bad acting",
    "excellent story",
    "poor plot",
    "wonderful cinematography",
    "disappointing ending",
    "fantastic direction",
    "mediocre script",
];

/// Frequency-ranked word vocabulary.
///
/// Ids start at 1, most frequent word first; ties keep first-seen order.
/// Id 0 is reserved for padding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tokenizer {
    num_words: usize,
    /// Word counts in first-seen order
    word_counts: Vec<(String, u64)>,
    #[serde(skip)]
    word_index: HashMap<String, u32>,
}

impl Tokenizer {
    pub fn new(num_words: usize) -> Self {
        Self {
            num_words,
            word_counts: Vec::new(),
            word_index: HashMap::new(),
        }
    }

    /// Load a saved vocabulary, or fit [`DEMO_CORPUS`] and save it to `path`.
    pub fn load_or_create(path: &Path, num_words: usize) -> Result<Self, TokenizerError> {
        if path.exists() {
            let tokenizer = Self::load(path)?;
            tracing::info!(
                "Loaded tokenizer from {} ({} words)",
                path.display(),
                tokenizer.vocabulary_size()
            );
            return Ok(tokenizer);
        }

        tracing::warn!(
            "No tokenizer at {}, fitting demo vocabulary",
            path.display()
        );
        let mut tokenizer = Self::new(num_words);
        tokenizer.fit_on_texts(DEMO_CORPUS);
        tokenizer.save(path)?;
        Ok(tokenizer)
    }

    pub fn load(path: &Path) -> Result<Self, TokenizerError> {
        let data = fs::read_to_string(path)?;
        let mut tokenizer: Tokenizer = serde_json::from_str(&data)?;
        tokenizer.rebuild_index();
        Ok(tokenizer)
    }

    pub fn save(&self, path: &Path) -> Result<(), TokenizerError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Saved tokenizer to {}", path.display());
        Ok(())
    }

    /// Count the words of every text and re-rank the vocabulary.
    pub fn fit_on_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = self
            .word_counts
            .iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i))
            .collect();

        for text in texts {
            for word in text_to_word_sequence(text.as_ref()) {
                match positions.get(&word) {
                    Some(&i) => self.word_counts[i].1 += 1,
                    None => {
                        positions.insert(word.clone(), self.word_counts.len());
                        self.word_counts.push((word, 1));
                    }
                }
            }
        }

        self.rebuild_index();
    }

    /// Map each known word to its id. Unknown words and ids at or above
    /// `num_words` are dropped.
    pub fn texts_to_sequence(&self, text: &str) -> Vec<u32> {
        text_to_word_sequence(text)
            .iter()
            .filter_map(|word| self.word_index.get(word).copied())
            .filter(|&id| self.num_words == 0 || (id as usize) < self.num_words)
            .collect()
    }

    pub fn word_id(&self, word: &str) -> Option<u32> {
        self.word_index.get(word).copied()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.word_index.len()
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    fn rebuild_index(&mut self) {
        let mut ranked: Vec<&(String, u64)> = self.word_counts.iter().collect();
        // stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        self.word_index = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i as u32 + 1))
            .collect();
    }
}

/// Lowercase, turn [`WORD_FILTERS`] into spaces and split on spaces.
pub fn text_to_word_sequence(text: &str) -> Vec<String> {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| if WORD_FILTERS.contains(c) { ' ' } else { c })
        .collect();

    lowered
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Left-pad with zeros to `maxlen`, keeping the last `maxlen` ids when longer.
pub fn pad_sequence(ids: &[u32], maxlen: usize) -> Vec<u32> {
    if ids.len() >= maxlen {
        return ids[ids.len() - maxlen..].to_vec();
    }

    let mut padded = vec![0; maxlen - ids.len()];
    padded.extend_from_slice(ids);
    padded
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tokenizer file: {0}")]
    Json(#[from] serde_json::Error),
}
