//! Embedded fixtures for tests and the replay example.
//!
//! `EVENTS_JSON` fixtures are arrays of recognizer events (`text`,
//! `is_final`, `timestamp_ms`) recorded against the matching `SCRIPT`
//! passage. Event text is the full cumulative hypothesis for the current
//! utterance, exactly as a streaming recognizer would deliver it: interim
//! revisions, a mis-recognition later corrected, an off-script filler, and
//! a silence gap over a second long.

pub mod gettysburg {
    pub const SCRIPT: &str = include_str!("../fixtures/gettysburg/script.txt");
    pub const EVENTS_JSON: &str = include_str!("../fixtures/gettysburg/events.json");
}
