/// Provider-agnostic recognizer event.
///
/// `text` is the full current hypothesis for the utterance in progress, not
/// a delta: a non-final hypothesis may shrink, grow, or be replaced wholesale
/// by the next event, while a final event closes the utterance segment and
/// will not be revised again. Convert your recognizer's wire format into
/// this type before feeding [`crate::engine::ScriptTracker::process`]; the
/// engine stays free of transport dependencies and synthetic events (tests,
/// corrections) need no wire-format scaffolding.
///
/// `timestamp_ms` is the recognizer's clock in milliseconds. The engine only
/// ever compares timestamps of consecutive events, so any epoch works as
/// long as it is monotonic within a session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, specta::Type)]
pub struct TranscriptEvent {
    pub text: String,
    pub is_final: bool,
    pub timestamp_ms: i64,
}
