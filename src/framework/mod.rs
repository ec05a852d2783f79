//! Trace engine: identifiers, the begin/end/exception contract, and the
//! thread-bound manager that renders the trace tree.
//!
//! # Main Components
//!
//! - [`TraceId`] - Per-request token plus nesting depth
//! - [`TraceStatus`] - Snapshot returned by `begin`, redeemed at completion
//! - [`LogTrace`] - The three-operation capability contract
//! - [`ThreadLocalTrace`] - The shipped manager, generic over its [`TraceSink`]
//! - [`TraceConfig`] - Emission options
//!
//! # Testing
//!
//! See the [`mock`] module for the in-memory sink used to assert on emitted
//! lines.

pub mod config;
pub mod id;
pub mod local;
pub mod mock;
pub mod sink;
pub mod status;
pub mod trace;

// Re-export core types for convenience
pub use config::{TraceConfig, COMPLETE_ENABLED_ENV};
pub use id::TraceId;
pub use local::ThreadLocalTrace;
pub use mock::{MemorySink, RecordLevel};
pub use sink::{TraceSink, TracingSink};
pub use status::TraceStatus;
pub use trace::LogTrace;
