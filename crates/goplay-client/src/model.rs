//! Wire types for the goplay compile endpoint.
//!
//! The proxy answers `/_/compile` with the upstream playground payload:
//! `{ "Errors": string, "Events": [{ "Kind", "Message", "Delay" }] }`.
//! Field names stay PascalCase on the wire, snake_case in Rust.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of a remote compile call, owned by the caller until discarded.
///
/// A non-empty `errors` string means the program did not build; the
/// event list is never rendered in that case, even when structurally
/// present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileResult {
    /// Build diagnostics; empty means compilation succeeded.
    #[serde(rename = "Errors", default)]
    pub errors: String,

    /// Timed output events, in render order. Absent or `null` on the
    /// wire is treated as empty.
    #[serde(rename = "Events", default)]
    pub events: Option<Vec<Event>>,
}

impl CompileResult {
    /// Whether the program failed to build (non-empty `errors`).
    pub fn is_build_failure(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The event sequence, with a missing list normalized to empty.
    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or(&[])
    }
}

/// One timed unit of program output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Rendering category, e.g. `stdout`, `stderr` or `system`.
    /// Unconstrained; the renderer applies it as a display tag.
    #[serde(rename = "Kind")]
    pub kind: String,

    /// Literal text to display, inserted without transformation.
    #[serde(rename = "Message")]
    pub message: String,

    /// Nanoseconds to wait before rendering this event, relative to
    /// the previous event. `-1` (or any negative value) means no delay.
    #[serde(rename = "Delay", default)]
    pub delay_ns: i64,
}

impl Event {
    /// The pacing delay scaled to the sink's millisecond resolution,
    /// or `None` when the event carries a negative (no-delay) value.
    pub fn delay(&self) -> Option<Duration> {
        if self.delay_ns < 0 {
            None
        } else {
            Some(Duration::from_millis((self.delay_ns / 1_000_000) as u64))
        }
    }
}
