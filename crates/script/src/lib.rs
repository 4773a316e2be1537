pub mod equiv;
pub mod model;
pub mod words;

pub use equiv::{PHONETIC_MATCH_MIN_CHARS, words_match};
pub use model::{ReferenceScript, ReferenceWord};
pub use words::{PHONETIC_MIN_CHARS, SpokenWord, normalize, split_normalized};
