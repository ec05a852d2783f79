//! Wiring layer: builds the default trace pipeline and the logging
//! infrastructure around it.

pub mod system;
pub mod tracing;

pub use system::TraceSystem;
