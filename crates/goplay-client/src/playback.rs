//! Timed playback of a compile result into an output sink.
//!
//! One invocation drives one transcript, strictly in sequence:
//! clear + waiting notice, await the remote compile, clear again, then
//! either the build-failure transcript or each event in order with its
//! pacing delay, ending with the fixed exit notice. Suspension between
//! events is cooperative and purely visual; it carries no correctness
//! requirement.
//!
//! Independent invocations own their own sink references and may run
//! concurrently. Concurrent runs against the *same* sink are not
//! guarded; callers must serialize them.

use tracing::instrument;

use crate::error::Result;
use crate::model::CompileResult;
use crate::proxy::GoplayProxy;
use crate::snippet::{Snippet, GO_LANG};

/// Kind tag for renderer-originated status notices.
pub const KIND_SYSTEM: &str = "system";
/// Kind tag for build-error text and local input rejections.
pub const KIND_ERROR: &str = "error";

/// Notice shown while the remote compile is in flight.
pub const MSG_WAITING: &str = "Waiting for remote server...";
/// Terminal notice when the program did not build.
pub const MSG_BUILD_FAILED: &str = "Go build failed.";
/// Terminal notice after all events have been rendered.
pub const MSG_PROGRAM_EXITED: &str = "Program exited.";

/// Destination for ordered display units.
///
/// Each appended unit is independently addressable and carries exactly
/// one category tag plus literal text; implementations must never merge
/// or reorder units.
pub trait TranscriptSink {
    /// Drop everything previously appended.
    fn clear(&mut self);

    /// Append one display unit tagged `kind` carrying the literal
    /// `message`.
    fn append(&mut self, kind: &str, message: &str);
}

/// One display unit as recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: String,
    pub message: String,
}

/// In-memory sink for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Vec<TranscriptEntry>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries appended since the last clear, in append order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }
}

impl TranscriptSink for MemorySink {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, kind: &str, message: &str) {
        self.entries.push(TranscriptEntry {
            kind: kind.to_string(),
            message: message.to_string(),
        });
    }
}

/// Compile `source` through `proxy` and play the result into `sink`.
///
/// A transport failure from the compile call propagates untouched; in
/// that case nothing beyond the waiting notice is guaranteed to remain
/// in the sink.
#[instrument(skip_all)]
pub async fn render_compile(
    proxy: &GoplayProxy,
    sink: &mut dyn TranscriptSink,
    source: &str,
    backend: Option<&str>,
) -> Result<()> {
    sink.clear();
    sink.append(KIND_SYSTEM, MSG_WAITING);

    let result = proxy.compile(source, backend).await?;

    sink.clear();
    play(&result, sink).await;
    Ok(())
}

/// Validate page-supplied content and only then touch the network.
///
/// A rejected input (not a code block, or a language tag other than
/// `go`) is reported as a placeholder message in the sink; no network
/// call is made.
pub async fn render_snippet(
    proxy: &GoplayProxy,
    sink: &mut dyn TranscriptSink,
    input: &str,
    backend: Option<&str>,
) -> Result<()> {
    match Snippet::from_markdown(input, GO_LANG) {
        Ok(snippet) => render_compile(proxy, sink, &snippet.source, backend).await,
        Err(reason) => {
            sink.clear();
            sink.append(KIND_ERROR, &format!("GoPlay: {reason}."));
            Ok(())
        }
    }
}

/// Play an already-obtained compile result into `sink`.
///
/// Build failure renders the error text followed by the failure
/// notice and nothing else. Otherwise every event is appended in
/// sequence order, sleeping its scaled delay first when non-negative,
/// and the exit notice closes the transcript.
pub async fn play(result: &CompileResult, sink: &mut dyn TranscriptSink) {
    if result.is_build_failure() {
        sink.append(KIND_ERROR, &result.errors);
        sink.append(KIND_SYSTEM, MSG_BUILD_FAILED);
        return;
    }

    for event in result.events() {
        if let Some(delay) = event.delay() {
            tokio::time::sleep(delay).await;
        }
        sink.append(&event.kind, &event.message);
    }
    sink.append(KIND_SYSTEM, MSG_PROGRAM_EXITED);
}
