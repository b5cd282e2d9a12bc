//! # Log capture
//!
//! A `tracing-subscriber` layer that records emitted events into an
//! [`ObservedLogs`] sink, plus [`log_messages`] to pull the message strings
//! back out in emission order. The test-side replacement for shipping logs
//! anywhere real.
//!
//! ```
//! use tracing_subscriber::prelude::*;
//!
//! let (layer, logs) = pipeline_testkit::observer::capture();
//! let subscriber = tracing_subscriber::registry().with(layer);
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("starting");
//! });
//! assert_eq!(pipeline_testkit::log_messages(&logs), ["starting"]);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Build a capture layer and the sink it records into.
///
/// Attach the layer to a subscriber scoped to the test (e.g. via
/// `tracing::subscriber::with_default`) and read the sink afterwards.
pub fn capture() -> (CaptureLayer, ObservedLogs) {
    let logs = ObservedLogs::default();
    let layer = CaptureLayer { logs: logs.clone() };
    (layer, logs)
}

/// One captured log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedEntry {
    /// Event level
    pub level: Level,
    /// Event target (module path by default)
    pub target: String,
    /// The event's message field, empty if the event had none
    pub message: String,
}

/// Ordered sink of captured log events.
///
/// Cheap to clone; all clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct ObservedLogs {
    entries: Arc<Mutex<Vec<ObservedEntry>>>,
}

impl ObservedLogs {
    fn push(&self, entry: ObservedEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Snapshot of all captured entries, in emission order.
    pub fn all(&self) -> Vec<ObservedEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The message strings of `logs`, in emission order. No filtering, no
/// deduplication; an empty sink yields an empty vec.
pub fn log_messages(logs: &ObservedLogs) -> Vec<String> {
    logs.all().into_iter().map(|entry| entry.message).collect()
}

/// Layer that records every event into an [`ObservedLogs`] sink.
#[derive(Debug, Clone)]
pub struct CaptureLayer {
    logs: ObservedLogs,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logs.push(ObservedEntry {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: visitor.message,
        });
    }
}

/// Extracts the conventional `message` field from an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
