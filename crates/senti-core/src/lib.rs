pub mod classifier;
pub mod preprocess;
pub mod tokenizer;

pub use classifier::{Prediction, SentimentClassifier, SentimentLabel};
pub use preprocess::{DefaultPreprocessor, Preprocessor, normalize};
pub use tokenizer::{Tokenizer, TokenizerError};
