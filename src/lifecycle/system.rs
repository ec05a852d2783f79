//! Construction of the default trace pipeline.

use std::sync::Arc;

use crate::framework::{ThreadLocalTrace, TraceConfig, TraceSink, TracingSink};
use crate::intercept::CallInterceptor;

/// Wires the trace pipeline and hands out interceptors bound to it.
///
/// `TraceSystem` is the composition root: it owns the choice of sink and
/// options, builds the thread-bound manager once, and every interceptor it
/// hands out shares that manager. Services receive an interceptor, never the
/// manager itself.
///
/// # Example
///
/// ```ignore
/// let system = TraceSystem::from_env();
/// let service = OrderService::new(system.interceptor());
/// ```
pub struct TraceSystem {
    interceptor: CallInterceptor,
}

impl TraceSystem {
    /// Pipeline over the `tracing`-backed sink with default options.
    pub fn new() -> Self {
        Self::with_config(TraceConfig::default())
    }

    /// Pipeline over the `tracing`-backed sink, honoring environment
    /// overrides (see [`TraceConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::with_config(TraceConfig::from_env())
    }

    /// Pipeline over the `tracing`-backed sink with explicit options.
    pub fn with_config(config: TraceConfig) -> Self {
        Self::with_sink(TracingSink, config)
    }

    /// Pipeline over a custom sink; tests pass a
    /// [`MemorySink`](crate::framework::MemorySink) here.
    pub fn with_sink<S: TraceSink + 'static>(sink: S, config: TraceConfig) -> Self {
        let trace = Arc::new(ThreadLocalTrace::with_sink(sink, config));
        Self {
            interceptor: CallInterceptor::new(trace),
        }
    }

    /// A handle for wrapping calls; clones share the same trace manager.
    pub fn interceptor(&self) -> CallInterceptor {
        self.interceptor.clone()
    }
}

impl Default for TraceSystem {
    fn default() -> Self {
        Self::new()
    }
}
