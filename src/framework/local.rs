//! # Thread-Bound Trace Manager
//!
//! This module holds the engine of the crate: the [`LogTrace`] implementation
//! that keeps one optional [`TraceId`] per thread and turns begin/complete
//! events into the rendered trace tree.
//!
//! ## Key Types
//!
//! - [`ThreadLocalTrace`]: the shipped trace manager, generic over its sink.
//!
//! ## Concurrency Model
//!
//! The manager introduces no concurrency of its own; it runs inside whatever
//! thread is executing the traced call. Isolation comes from binding the
//! current identifier to the calling thread with `thread_local!` storage:
//! no other thread can see or mutate it, so no locking is needed.

use std::cell::RefCell;
use std::error::Error;

use crate::framework::{LogTrace, TraceConfig, TraceId, TraceSink, TraceStatus, TracingSink};

const START_PREFIX: &str = "->";
const START_MESSAGE: &str = "=== REQ START===";
const COMPLETE_PREFIX: &str = "<-";
const COMPLETE_MESSAGE: &str = "=== RES COMPLETE===";
const EX_PREFIX: &str = "X";

/// Longest origin-chain suffix reported in an error record.
const MAX_CAUSE_ENTRIES: usize = 10;

thread_local! {
    // The one optional identifier per thread. Absent means "no traced call
    // active on this thread". Owned exclusively by this module.
    static CURRENT_ID: RefCell<Option<TraceId>> = const { RefCell::new(None) };
}

/// Trace manager that binds the current identifier to the calling thread.
///
/// # Architecture Note
/// The manager is generic over its [`TraceSink`] with the production
/// [`TracingSink`] as the default, so the rendering and state rules are
/// written once and reused by every sink. The in-memory sink the tests use
/// exercises exactly the code that ships.
///
/// The per-thread slot is process-wide: two managers used on the same thread
/// share the nesting state. Run one trace pipeline per process.
pub struct ThreadLocalTrace<S: TraceSink = TracingSink> {
    sink: S,
    complete_enabled: bool,
}

impl ThreadLocalTrace<TracingSink> {
    /// Manager with the `tracing`-backed sink and default options.
    pub fn new() -> Self {
        Self::with_sink(TracingSink, TraceConfig::default())
    }

    /// Manager with the `tracing`-backed sink, honoring environment overrides.
    pub fn from_env() -> Self {
        Self::with_sink(TracingSink, TraceConfig::from_env())
    }
}

impl Default for ThreadLocalTrace<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TraceSink> ThreadLocalTrace<S> {
    /// Manager delivering to `sink` with the given options.
    pub fn with_sink(sink: S, config: TraceConfig) -> Self {
        Self {
            sink,
            complete_enabled: config.complete_enabled,
        }
    }

    /// Advances the thread's identifier by one level, creating a fresh root
    /// identifier if none is active, and returns the new current value.
    fn sync_trace_id(&self) -> TraceId {
        CURRENT_ID.with(|cell| {
            let mut slot = cell.borrow_mut();
            let current = match slot.take() {
                Some(id) => id.next_level(),
                None => TraceId::new(),
            };
            *slot = Some(current.clone());
            current
        })
    }

    /// Retreats the thread's identifier by one level, clearing the slot when
    /// the root completes. Reads the live slot, not the completing status:
    /// if calls were mis-nested the live state is the one that must unwind.
    fn release_trace_id(&self) {
        CURRENT_ID.with(|cell| {
            let mut slot = cell.borrow_mut();
            if let Some(id) = slot.take() {
                if !id.is_root() {
                    *slot = Some(id.previous_level());
                }
            }
        });
    }

    /// Unified completion: called by `end` with no error and by `exception`
    /// with one. Emits the record, the root banner where due, and releases
    /// the thread state.
    fn complete(&self, status: TraceStatus, error: Option<&dyn Error>, params: &[String]) {
        let trace_id = status.trace_id();

        if let Some(error) = error {
            let mut rendered_params = String::new();
            for param in params {
                rendered_params.push_str(param);
                rendered_params.push_str(",\n");
            }
            let origin = cause_chain(error).join("\n");
            self.sink.error(&format!(
                "[{}] {}{} \n exception = \n{}\n from = \n{}\n params = \n{}",
                trace_id.token(),
                render_indent(EX_PREFIX, trace_id.depth()),
                status.label(),
                error,
                origin,
                rendered_params,
            ));
        } else if self.complete_enabled {
            self.sink.info(&format!(
                "[{}] {}{}",
                trace_id.token(),
                render_indent(COMPLETE_PREFIX, trace_id.depth()),
                status.label(),
            ));
        }

        if trace_id.is_root() {
            self.sink
                .info(&format!("[{}] {}", trace_id.token(), COMPLETE_MESSAGE));
        }

        self.release_trace_id();
    }
}

impl<S: TraceSink> LogTrace for ThreadLocalTrace<S> {
    fn begin(&self, label: &str) -> TraceStatus {
        let trace_id = self.sync_trace_id();

        if trace_id.is_root() {
            self.sink
                .info(&format!("[{}] {}", trace_id.token(), START_MESSAGE));
        }
        self.sink.info(&format!(
            "[{}] {}{}",
            trace_id.token(),
            render_indent(START_PREFIX, trace_id.depth()),
            label,
        ));

        TraceStatus::new(trace_id, label)
    }

    fn end(&self, status: TraceStatus) {
        self.complete(status, None, &[]);
    }

    fn exception(&self, status: TraceStatus, error: &dyn Error, params: &[String]) {
        self.complete(status, Some(error), params);
    }
}

/// Renders the depth marker in front of a body line.
///
/// Depth 0 renders as nothing. Deeper levels render one segment per level:
/// filler bars for every ancestor, then a bar carrying the direction prefix
/// for the level itself, so `render_indent("->", 2)` is `"|   |-> "`.
fn render_indent(prefix: &str, depth: u32) -> String {
    let mut out = String::new();
    for level in 0..depth {
        if level == depth - 1 {
            out.push('|');
            out.push_str(prefix);
            out.push(' ');
        } else {
            out.push_str("|   ");
        }
    }
    out
}

/// Walks `error`'s source chain, oldest last, capped at [`MAX_CAUSE_ENTRIES`].
fn cause_chain(error: &dyn Error) -> Vec<String> {
    let mut entries = Vec::new();
    let mut cursor = error.source();
    while let Some(cause) = cursor {
        if entries.len() == MAX_CAUSE_ENTRIES {
            break;
        }
        entries.push(cause.to_string());
        cursor = cause.source();
    }
    entries
}
