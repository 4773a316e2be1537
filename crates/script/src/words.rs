use rphonetic::{DoubleMetaphone, Encoder};

/// Words below this many characters carry no phonetic codes; one-letter
/// tokens encode to near-universal codes and would match almost anything.
pub const PHONETIC_MIN_CHARS: usize = 2;

/// Lowercase a raw token and strip everything that is not alphanumeric.
///
/// "Liberty," → "liberty", "it's" → "its", "—" → "".
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split free text on whitespace into normalized words, dropping tokens
/// that normalize to nothing (punctuation-only, dashes, …).
pub fn split_normalized(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) fn phonetic_codes(word: &str) -> (String, String) {
    if word.chars().count() < PHONETIC_MIN_CHARS {
        return (String::new(), String::new());
    }
    let metaphone = DoubleMetaphone::default();
    (metaphone.encode(word), metaphone.encode_alternate(word))
}

// ── Internal pipeline type ──────────────────────────────────────────────────

/// A single recognized word from a hypothesis, normalized and fingerprinted.
///
/// This is the lingua franca of the matching pipeline: hypothesis text is
/// split into `SpokenWord`s once per event and every search primitive works
/// on these, never on raw text.
#[derive(Debug, Clone)]
pub struct SpokenWord {
    pub text: String,
    pub phonetic_primary: String,
    pub phonetic_secondary: String,
}

impl SpokenWord {
    /// Normalize and fingerprint one raw token. Returns `None` when the
    /// token normalizes to an empty string.
    pub fn encode(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }
        let (phonetic_primary, phonetic_secondary) = phonetic_codes(&text);
        Some(Self {
            text,
            phonetic_primary,
            phonetic_secondary,
        })
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
