//! # Cursor tracker
//!
//! The stateful core: one `ScriptTracker` per reference script per session,
//! fed one [`TranscriptEvent`] at a time, exposing a single cursor ("all
//! reference words with index < cursor are spoken").
//!
//! ## Event anatomy
//!
//! Hypothesis text is cumulative per utterance, so each event is first
//! reduced to its **new** words via the consumed-word counter; a hypothesis
//! that shrinks (recognizer revision, utterance restart) clamps the counter
//! down and re-matches a short tail instead of stalling.
//!
//! ## Phase ordering
//!
//! Backward correction runs first, then pause-relaxed forward matching,
//! then the regular forward phase (single-word scans before the
//! consecutive-run scan), and finally the per-event advance cap. The
//! ordering is observable behavior on ambiguous input and must not be
//! rearranged.

use cue_script::{ReferenceScript, SpokenWord};

use crate::event::TranscriptEvent;
use crate::profile::{MatchingProfile, ProfileError};
use crate::search::{best_run, scan_backward, scan_forward};

/// Silence longer than this between events switches the next update to the
/// pause-relaxed matching path.
const PAUSE_GAP_MS: i64 = 1000;

/// How many trailing hypothesis words are re-matched when an event carries
/// no new words. The same spoken words can then influence matching twice
/// across events; see `tail_reprocess_may_rematch_repeated_words`.
const REPROCESS_TAIL_WORDS: usize = 5;

/// The backward single-word scan starts this many positions behind the
/// cursor, leaving the just-spoken words alone.
const BACKWARD_NEAR_SKIP: usize = 5;

/// The backward run window ends this many positions short of the cursor.
const BACKWARD_RUN_MARGIN: usize = 3;

/// Confidence bar for a backward consecutive-run jump. Higher than the
/// forward bar even under the default profile.
const BACKWARD_RUN_MIN: usize = 3;

/// Minimum spoken-word length considered by the backward single-word scan.
const BACKWARD_MIN_CHARS: usize = 4;

/// Narrow window of the regular forward single-word scan.
const NEAR_SCAN_WINDOW: usize = 8;

/// Window and length floor of the pause-relaxed scan.
const PAUSE_SCAN_WINDOW: usize = 12;
const PAUSE_MIN_CHARS: usize = 2;

/// Follows a speaker through a reference script.
///
/// Owns its [`ReferenceScript`] outright, so exactly one tracking session
/// can exist per script build. Processing is synchronous and infallible:
/// recognizer noise, off-script speech, and empty hypotheses degrade to "no
/// progress," never to an error.
pub struct ScriptTracker {
    script: ReferenceScript,
    profile: MatchingProfile,
    cursor: usize,
    consumed_words: usize,
    last_event_ms: Option<i64>,
}

impl ScriptTracker {
    /// Track `script` with the default matching profile.
    pub fn new(script: ReferenceScript) -> Self {
        Self {
            script,
            profile: MatchingProfile::default(),
            cursor: 0,
            consumed_words: 0,
            last_event_ms: None,
        }
    }

    /// Track `script` with a custom profile, validated up front.
    pub fn with_profile(
        script: ReferenceScript,
        profile: MatchingProfile,
    ) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            script,
            profile,
            cursor: 0,
            consumed_words: 0,
            last_event_ms: None,
        })
    }

    /// The single read value of the display contract: all reference words
    /// with index below this are considered spoken.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn script(&self) -> &ReferenceScript {
        &self.script
    }

    pub fn profile(&self) -> &MatchingProfile {
        &self.profile
    }

    /// Retune the forward search window. Validated like construction;
    /// unbounded above.
    pub fn set_look_ahead(&mut self, words: usize) -> Result<(), ProfileError> {
        let mut profile = self.profile.clone();
        profile.look_ahead_words = words;
        profile.validate()?;
        self.profile = profile;
        Ok(())
    }

    pub fn set_allow_backward(&mut self, allow: bool) {
        self.profile.allow_backward_match = allow;
    }

    /// Zero all runtime state. The configured profile survives; selecting a
    /// different one is a construction-time decision.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.consumed_words = 0;
        self.last_event_ms = None;
        tracing::debug!("tracker_reset");
    }

    /// Manual cursor override (user taps a word). Clamps to the script,
    /// clears the consumed-word counter so the next hypothesis is matched
    /// from scratch. Processing is synchronous, so no stale candidate can
    /// land after the jump.
    pub fn jump_to(&mut self, index: usize) {
        self.cursor = index.min(self.script.len());
        self.consumed_words = 0;
        tracing::debug!(cursor = self.cursor, "manual_jump");
    }

    /// Process one recognizer event and return the committed cursor.
    ///
    /// Empty scripts and empty or whitespace-only hypotheses are no-ops.
    pub fn process(&mut self, event: &TranscriptEvent) -> usize {
        let words: Vec<SpokenWord> = event
            .text
            .split_whitespace()
            .filter_map(SpokenWord::encode)
            .collect();
        if self.script.is_empty() || words.is_empty() {
            return self.cursor;
        }

        let new_start = self.consumed_words.min(words.len());
        let new_words: &[SpokenWord] = if new_start < words.len() {
            &words[new_start..]
        } else {
            &words[words.len().saturating_sub(REPROCESS_TAIL_WORDS)..]
        };
        self.consumed_words = words.len();

        let paused = self
            .last_event_ms
            .is_some_and(|previous| event.timestamp_ms - previous > PAUSE_GAP_MS);
        self.last_event_ms = Some(event.timestamp_ms);

        let mut candidate = self.cursor;
        if self.profile.allow_backward_match {
            candidate = self.backward_phase(new_words, candidate);
        }
        if paused {
            candidate = self.pause_phase(new_words, candidate);
        }
        candidate = self.forward_phase(new_words, candidate);

        let cap = if event.is_final {
            self.profile.max_advance_final
        } else {
            self.profile.max_advance_interim
        };
        let committed = candidate
            .min(self.cursor.saturating_add(cap))
            .min(self.script.len());
        if committed < candidate {
            tracing::debug!(
                candidate,
                committed,
                is_final = event.is_final,
                "advance_capped"
            );
        }

        self.cursor = committed;
        self.cursor
    }

    /// Catch the speaker repeating something already behind the cursor.
    ///
    /// Single-word hits scan from `cursor - 5` down through the look-behind
    /// window. When none fire and enough new words exist, a consecutive run
    /// of at least [`BACKWARD_RUN_MIN`] can confirm a jump, accepted only
    /// if it lands strictly below the cursor.
    fn backward_phase(&self, new_words: &[SpokenWord], candidate: usize) -> usize {
        let cursor = self.cursor;
        let floor = cursor.saturating_sub(self.profile.look_behind_words);
        let mut out = candidate;
        let mut fired = false;

        if let Some(top) = cursor.checked_sub(BACKWARD_NEAR_SKIP) {
            for word in new_words {
                if word.char_len() < BACKWARD_MIN_CHARS {
                    continue;
                }
                if let Some(pos) = scan_backward(word, &self.script, top, floor) {
                    out = pos + 1;
                    fired = true;
                    tracing::debug!(from = cursor, to = out, word = %word.text, "backward_word_match");
                }
            }
        }

        if !fired && new_words.len() >= 2 {
            if let Some(limit) = cursor.checked_sub(BACKWARD_RUN_MARGIN) {
                if let Some(run) = best_run(
                    new_words,
                    &self.script,
                    floor,
                    limit,
                    self.profile.run_gap,
                    BACKWARD_RUN_MIN,
                ) {
                    let target = run.last_index + 1;
                    if target < cursor {
                        out = target;
                        tracing::debug!(
                            from = cursor,
                            to = out,
                            matches = run.count,
                            "backward_run_match"
                        );
                    }
                }
            }
        }

        out
    }

    /// After a silence the speaker has usually moved on; a single matching
    /// word close ahead is enough to re-anchor without waiting for run
    /// confidence. First hit wins and ends the phase.
    fn pause_phase(&self, new_words: &[SpokenWord], candidate: usize) -> usize {
        for word in new_words {
            if word.char_len() < PAUSE_MIN_CHARS {
                continue;
            }
            if let Some(pos) = scan_forward(word, &self.script, candidate, PAUSE_SCAN_WINDOW) {
                tracing::debug!(from = candidate, to = pos + 1, word = %word.text, "pause_recovery");
                return pos + 1;
            }
        }
        candidate
    }

    /// Per new word: a near-window scan at the local length floor, then a
    /// full look-ahead scan at the long-word floor, keeping the furthest
    /// advance. A consecutive-run scan over the look-ahead window runs
    /// last and may jump further if it meets the profile's confidence bar.
    fn forward_phase(&self, new_words: &[SpokenWord], candidate: usize) -> usize {
        let mut out = candidate;

        for word in new_words {
            let len = word.char_len();
            if len >= self.profile.min_word_len_local {
                if let Some(pos) = scan_forward(word, &self.script, out, NEAR_SCAN_WINDOW) {
                    out = out.max(pos + 1);
                }
            }
            if len >= self.profile.min_word_len_long {
                if let Some(pos) =
                    scan_forward(word, &self.script, out, self.profile.look_ahead_words)
                {
                    out = out.max(pos + 1);
                }
            }
        }

        if let Some(run) = best_run(
            new_words,
            &self.script,
            out,
            out.saturating_add(self.profile.look_ahead_words),
            self.profile.run_gap,
            self.profile.min_consecutive_run,
        ) {
            out = out.max(run.last_index + 1);
        }

        out
    }
}
