//! Where rendered trace lines are delivered.

use tracing::{error, info};

/// Destination for fully rendered trace lines.
///
/// The manager renders every record to its final text before handing it over,
/// so a sink never re-formats, it only delivers. Sinks must tolerate
/// concurrent writers; the manager calls them from whatever thread is running
/// the traced call.
pub trait TraceSink: Send + Sync {
    /// Delivers a begin/complete body line or a root banner.
    fn info(&self, line: &str);

    /// Delivers a multi-line error record.
    fn error(&self, line: &str);
}

/// The production sink: forwards lines to the `tracing` macros, so the
/// installed subscriber decides formatting, filtering, and output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn info(&self, line: &str) {
        info!("{}", line);
    }

    fn error(&self, line: &str) {
        error!("{}", line);
    }
}
