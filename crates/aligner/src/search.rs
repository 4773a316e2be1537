//! Pure candidate-search primitives over a reference script.
//!
//! Two shapes of evidence exist: a **single-word scan** (first equivalence
//! match inside a bounded window) and a **consecutive-run scan** (greedy
//! in-order consumption of spoken words with a bounded positional gap).
//! Runs are the high-confidence signal; single-word hits are cheap but only
//! trusted inside narrow windows. All functions are pure and leave window
//! policy to the engine.

use cue_script::{ReferenceScript, SpokenWord, words_match};

/// Score of one consecutive-run scan: how many spoken words matched and the
/// reference position of the last match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunMatch {
    pub count: usize,
    pub last_index: usize,
}

/// First position in `[start, start + window)` whose reference word matches
/// `spoken`, scanning in increasing order.
pub(crate) fn scan_forward(
    spoken: &SpokenWord,
    script: &ReferenceScript,
    start: usize,
    window: usize,
) -> Option<usize> {
    let end = start.saturating_add(window).min(script.len());
    (start..end).find(|&pos| script.word(pos).is_some_and(|word| words_match(spoken, word)))
}

/// First match scanning decreasing from `top` down to `floor` inclusive,
/// so the nearest position behind wins.
pub(crate) fn scan_backward(
    spoken: &SpokenWord,
    script: &ReferenceScript,
    top: usize,
    floor: usize,
) -> Option<usize> {
    if script.is_empty() || top < floor {
        return None;
    }
    let top = top.min(script.len() - 1);
    (floor..=top)
        .rev()
        .find(|&pos| script.word(pos).is_some_and(|word| words_match(spoken, word)))
}

/// Greedy consecutive-run scan from one trial position.
///
/// Spoken words of one character or less are skipped outright. Every other
/// word must match within `gap` positions past the current reference
/// position; the first word that cannot terminates the run. Returns `None`
/// when nothing matched at all.
pub(crate) fn run_at(
    spoken: &[SpokenWord],
    script: &ReferenceScript,
    trial: usize,
    gap: usize,
) -> Option<RunMatch> {
    let mut pos = trial;
    let mut count = 0;
    let mut last_index = None;

    for word in spoken {
        if word.char_len() <= 1 {
            continue;
        }
        let limit = pos.saturating_add(gap + 1).min(script.len());
        match (pos..limit).find(|&p| script.word(p).is_some_and(|w| words_match(word, w))) {
            Some(found) => {
                count += 1;
                last_index = Some(found);
                pos = found + 1;
            }
            None => break,
        }
    }

    last_index.map(|last_index| RunMatch { count, last_index })
}

/// Best-scoring run over trial positions `[from, to)`, filtered by
/// `min_count`. Ties keep the earliest trial: only a strictly better count
/// replaces the current best.
pub(crate) fn best_run(
    spoken: &[SpokenWord],
    script: &ReferenceScript,
    from: usize,
    to: usize,
    gap: usize,
    min_count: usize,
) -> Option<RunMatch> {
    let to = to.min(script.len());
    let mut best: Option<RunMatch> = None;

    for trial in from..to {
        if let Some(run) = run_at(spoken, script, trial, gap) {
            if run.count >= min_count && best.as_ref().map_or(true, |b| run.count > b.count) {
                best = Some(run);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(text: &str) -> ReferenceScript {
        ReferenceScript::build(text)
    }

    fn spoken(text: &str) -> Vec<SpokenWord> {
        text.split_whitespace()
            .filter_map(SpokenWord::encode)
            .collect()
    }

    fn one(text: &str) -> SpokenWord {
        SpokenWord::encode(text).unwrap()
    }

    // ── scan_forward ─────────────────────────────────────────────────────

    #[test]
    fn forward_finds_first_match_in_window() {
        let s = script("the quick brown fox jumps over the lazy dog");
        assert_eq!(scan_forward(&one("the"), &s, 0, 9), Some(0));
        assert_eq!(scan_forward(&one("the"), &s, 1, 9), Some(6));
    }

    #[test]
    fn forward_respects_window_bound() {
        let s = script("the quick brown fox jumps over the lazy dog");
        assert_eq!(scan_forward(&one("dog"), &s, 0, 8), None);
        assert_eq!(scan_forward(&one("dog"), &s, 0, 9), Some(8));
    }

    #[test]
    fn forward_past_end_is_none() {
        let s = script("one two");
        assert_eq!(scan_forward(&one("two"), &s, 2, 10), None);
    }

    // ── scan_backward ────────────────────────────────────────────────────

    #[test]
    fn backward_prefers_nearest_position() {
        let s = script("the quick brown the lazy the dog");
        assert_eq!(scan_backward(&one("the"), &s, 5, 0), Some(5));
        assert_eq!(scan_backward(&one("the"), &s, 4, 0), Some(3));
    }

    #[test]
    fn backward_reaches_floor_inclusive() {
        let s = script("fox quick brown");
        assert_eq!(scan_backward(&one("fox"), &s, 2, 0), Some(0));
        assert_eq!(scan_backward(&one("fox"), &s, 2, 1), None);
    }

    #[test]
    fn backward_on_empty_script_is_none() {
        let s = script("");
        assert_eq!(scan_backward(&one("fox"), &s, 3, 0), None);
    }

    // ── run_at ───────────────────────────────────────────────────────────

    #[test]
    fn run_counts_consecutive_matches() {
        let s = script("four score and seven years ago");
        let run = run_at(&spoken("four score and seven"), &s, 0, 2).unwrap();
        assert_eq!(run.count, 4);
        assert_eq!(run.last_index, 3);
    }

    #[test]
    fn run_tolerates_bounded_gap() {
        // "score" sits two positions past "four"; gap 2 bridges it.
        let s = script("four and a score of years");
        let run = run_at(&spoken("four score"), &s, 0, 2).unwrap();
        assert_eq!(run.count, 2);
        assert_eq!(run.last_index, 3);
    }

    #[test]
    fn run_terminates_when_gap_exceeded() {
        let s = script("four and a mighty score of years");
        let run = run_at(&spoken("four score"), &s, 0, 2).unwrap();
        assert_eq!(run.count, 1);
        assert_eq!(run.last_index, 0);
    }

    #[test]
    fn run_skips_one_char_spoken_words() {
        let s = script("new nation conceived");
        let run = run_at(&spoken("new a nation"), &s, 0, 1).unwrap();
        assert_eq!(run.count, 2);
        assert_eq!(run.last_index, 1);
    }

    #[test]
    fn run_with_no_match_is_none() {
        let s = script("four score and seven");
        assert!(run_at(&spoken("banana"), &s, 0, 2).is_none());
    }

    // ── best_run ─────────────────────────────────────────────────────────

    #[test]
    fn best_run_picks_highest_count() {
        // Trial 0 matches only "quick" (count 1); trial 2 reaches the full
        // "quick brown" pair and must win.
        let s = script("quick dog cat mouse quick brown");
        let best = best_run(&spoken("quick brown"), &s, 0, 6, 2, 1).unwrap();
        assert_eq!(best.count, 2);
        assert_eq!(best.last_index, 5);
    }

    #[test]
    fn best_run_filters_below_min_count() {
        let s = script("four score and seven");
        assert!(best_run(&spoken("score banana"), &s, 0, 4, 2, 2).is_none());
    }

    #[test]
    fn best_run_tie_keeps_earliest() {
        // Identical two-word phrase at 0 and at 4; the earlier trial wins.
        let s = script("lazy dog sleeps here lazy dog");
        let best = best_run(&spoken("lazy dog"), &s, 0, 6, 2, 2).unwrap();
        assert_eq!(best.last_index, 1);
    }

    #[test]
    fn best_run_empty_window_is_none() {
        let s = script("four score");
        assert!(best_run(&spoken("four"), &s, 2, 2, 2, 1).is_none());
    }
}
