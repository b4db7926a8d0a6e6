//! goplay-client: Go Playground proxy client and playback renderer.
//!
//! The crate has two halves:
//!
//! - [`GoplayProxy`] wraps the two remote operations of a goplay HTTP
//!   proxy — `compile` and `share` — as typed async calls.
//! - [`render_compile`] plays a [`CompileResult`] back into a
//!   caller-supplied [`TranscriptSink`], honoring per-event delays and
//!   signaling the terminal outcome (build failure vs. normal exit).
//!
//! Page-supplied content can be vetted with [`Snippet::from_markdown`]
//! (or end to end with [`render_snippet`]) before any network call is
//! made.
//!
//! No state outlives a single call: each invocation owns its request,
//! its response and its sink reference.

pub mod error;
pub mod model;
pub mod playback;
pub mod proxy;
pub mod snippet;
pub mod telemetry;

pub use error::{PlayError, Result};
pub use model::{CompileResult, Event};
pub use playback::{
    play, render_compile, render_snippet, MemorySink, TranscriptEntry, TranscriptSink, KIND_ERROR,
    KIND_SYSTEM, MSG_BUILD_FAILED, MSG_PROGRAM_EXITED, MSG_WAITING,
};
pub use proxy::{share_url, GoplayProxy, DEFAULT_PROXY_URL, SHARE_BASE_URL};
pub use snippet::{Snippet, SnippetError, GO_LANG};
pub use telemetry::init_tracing;
