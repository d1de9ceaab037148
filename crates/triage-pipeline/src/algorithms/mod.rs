//! Text algorithms behind the labeler: sentence splitting, phrase
//! similarity, keyword extraction.

pub mod sentence_splitter;
pub mod similarity;
pub mod yake;

pub use yake::YakeExtractor;
