use crate::words::{phonetic_codes, split_normalized};

/// One word of the reference text, normalized and phonetically fingerprinted.
///
/// `index` equals the word's position in the script; indices are dense and
/// strictly increasing. Codes are empty strings for words under two
/// characters (see [`crate::words::PHONETIC_MIN_CHARS`]).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct ReferenceWord {
    pub index: u32,
    pub text: String,
    pub phonetic_primary: String,
    pub phonetic_secondary: String,
}

impl ReferenceWord {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The ordered, immutable word sequence of one reference text.
///
/// Built once per script; rebuilding is required whenever the underlying
/// text changes, and any tracker holding positions into the old build must
/// be reset, since indices are no longer meaningful otherwise.
#[derive(Debug, Clone, Default)]
pub struct ReferenceScript {
    words: Vec<ReferenceWord>,
}

impl ReferenceScript {
    /// Tokenize and fingerprint `text`. Empty or punctuation-only input
    /// yields an empty script; every operation on an empty script is a
    /// no-op rather than an error.
    pub fn build(text: &str) -> Self {
        let words = split_normalized(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let (phonetic_primary, phonetic_secondary) = phonetic_codes(&text);
                ReferenceWord {
                    index: index as u32,
                    text,
                    phonetic_primary,
                    phonetic_secondary,
                }
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&ReferenceWord> {
        self.words.get(index)
    }

    pub fn words(&self) -> &[ReferenceWord] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_splits_and_normalizes() {
        let script = ReferenceScript::build("The quick, brown fox!");
        let texts: Vec<_> = script.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn build_indices_are_dense_and_increasing() {
        let script = ReferenceScript::build("one two three four");
        for (pos, word) in script.words().iter().enumerate() {
            assert_eq!(word.index as usize, pos);
        }
    }

    #[test]
    fn build_drops_punctuation_only_tokens() {
        let script = ReferenceScript::build("a — new , nation");
        let texts: Vec<_> = script.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["a", "new", "nation"]);
    }

    #[test]
    fn empty_input_yields_empty_script() {
        assert!(ReferenceScript::build("").is_empty());
        assert!(ReferenceScript::build("  \n\t ").is_empty());
        assert_eq!(ReferenceScript::build("").len(), 0);
    }

    #[test]
    fn short_words_carry_no_codes() {
        let script = ReferenceScript::build("a nation");
        assert!(script.word(0).unwrap().phonetic_primary.is_empty());
        assert!(!script.word(1).unwrap().phonetic_primary.is_empty());
    }

    #[test]
    fn word_out_of_range_is_none() {
        let script = ReferenceScript::build("one two");
        assert!(script.word(2).is_none());
    }
}
