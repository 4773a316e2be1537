/// Matching-strictness configuration for one tracking session.
///
/// Two presets exist: [`MatchingProfile::default`] (wide windows, backward
/// search enabled) and [`MatchingProfile::conservative`] (narrower windows,
/// backward search disabled, higher confidence bar). All values are
/// validated at construction time, never on the match path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingProfile {
    /// Forward search window, in reference words, for long-word and
    /// consecutive-run scans.
    pub look_ahead_words: usize,
    /// Backward search window, in reference words.
    pub look_behind_words: usize,
    /// Whether the backward phase runs at all.
    pub allow_backward_match: bool,
    /// Minimum spoken-word length for the narrow near-window scan.
    pub min_word_len_local: usize,
    /// Minimum spoken-word length for the full look-ahead scan. Longer
    /// words carry more disambiguating signal and may search farther.
    pub min_word_len_long: usize,
    /// Consecutive matches required before a run is trusted as a jump
    /// target.
    pub min_consecutive_run: usize,
    /// Positional gap tolerated per spoken word inside a consecutive run
    /// (filler words, minor skips on the reference side).
    pub run_gap: usize,
    /// Hard cap on cursor advance from a single final event.
    pub max_advance_final: usize,
    /// Hard cap on cursor advance from a single interim event.
    pub max_advance_interim: usize,
}

impl Default for MatchingProfile {
    fn default() -> Self {
        Self {
            look_ahead_words: 50,
            look_behind_words: 30,
            allow_backward_match: true,
            min_word_len_local: 3,
            min_word_len_long: 6,
            min_consecutive_run: 2,
            run_gap: 2,
            max_advance_final: 20,
            max_advance_interim: 10,
        }
    }
}

impl MatchingProfile {
    /// Narrow windows, no backward correction, higher confidence bar but a
    /// wider run gap. For speakers who ad-lib heavily, where aggressive
    /// matching would drag the cursor around.
    pub fn conservative() -> Self {
        Self {
            look_ahead_words: 20,
            look_behind_words: 12,
            allow_backward_match: false,
            min_word_len_local: 4,
            min_word_len_long: 7,
            min_consecutive_run: 3,
            run_gap: 3,
            max_advance_final: 12,
            max_advance_interim: 6,
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.look_ahead_words == 0 {
            return Err(ProfileError::ZeroLookAhead);
        }
        if self.max_advance_final == 0 || self.max_advance_interim == 0 {
            return Err(ProfileError::ZeroAdvanceCap);
        }
        if self.min_consecutive_run == 0 {
            return Err(ProfileError::ZeroRunConfidence);
        }
        if self.min_word_len_local > self.min_word_len_long {
            return Err(ProfileError::LengthThresholdsInverted {
                local: self.min_word_len_local,
                long: self.min_word_len_long,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("look-ahead window must be at least one word")]
    ZeroLookAhead,

    #[error("advance caps must allow at least one word per event")]
    ZeroAdvanceCap,

    #[error("consecutive-run confidence must be at least one")]
    ZeroRunConfidence,

    #[error("local match length {local} exceeds long-range match length {long}")]
    LengthThresholdsInverted { local: usize, long: usize },
}
