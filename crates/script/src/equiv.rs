//! Decides whether a spoken word and a reference word count as "the same
//! word."
//!
//! Exact equality on the normalized text always matches. Phonetic matching
//! is gated on both sides being at least four characters: common short
//! words ("to"/"two", "for"/"four") collide phonetically at a rate that
//! would drag the cursor around on filler speech, so they only ever match
//! exactly.

use crate::model::ReferenceWord;
use crate::words::SpokenWord;

/// Minimum normalized length, in characters, for phonetic comparison.
pub const PHONETIC_MATCH_MIN_CHARS: usize = 4;

/// Equivalence judge for one spoken word against one reference word.
///
/// Phonetic equivalence holds when any cross-pairing of the two words'
/// primary/secondary codes is equal, and both codes in that pairing are
/// non-empty.
pub fn words_match(spoken: &SpokenWord, reference: &ReferenceWord) -> bool {
    if spoken.text == reference.text {
        return true;
    }
    if spoken.char_len() < PHONETIC_MATCH_MIN_CHARS
        || reference.char_len() < PHONETIC_MATCH_MIN_CHARS
    {
        return false;
    }
    code_eq(&spoken.phonetic_primary, &reference.phonetic_primary)
        || code_eq(&spoken.phonetic_primary, &reference.phonetic_secondary)
        || code_eq(&spoken.phonetic_secondary, &reference.phonetic_primary)
        || code_eq(&spoken.phonetic_secondary, &reference.phonetic_secondary)
}

fn code_eq(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && a == b
}
