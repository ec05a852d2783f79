//! # Call Interceptor
//!
//! Bridges an arbitrary invocation to the trace manager without altering the
//! invocation's observable outcome.
//!
//! # Architecture Note
//! There is no reflection or code weaving here: the host wraps a call site
//! explicitly, passing a display label, the pre-rendered argument values, and
//! a closure that does the work. The interceptor guarantees that every
//! `begin` is paired with exactly one completion, including on the error
//! path, which is what keeps the per-thread depth balanced when threads are
//! reused across requests.

use std::error::Error;
use std::sync::Arc;

use tracing::warn;

use crate::framework::{LogTrace, TraceId, TraceStatus};

/// Wraps invocations with begin/complete trace bookkeeping.
///
/// Holds a shared handle to any [`LogTrace`] implementation; clones share the
/// same manager, so one interceptor can be handed to every service that wants
/// its calls traced.
#[derive(Clone)]
pub struct CallInterceptor {
    trace: Arc<dyn LogTrace + Send + Sync>,
}

impl CallInterceptor {
    /// Interceptor delivering to `trace`.
    pub fn new(trace: Arc<dyn LogTrace + Send + Sync>) -> Self {
        Self { trace }
    }

    /// Runs `call` under the trace and returns its outcome unchanged.
    ///
    /// `params` are the call's argument values, in order, pre-rendered to
    /// strings; they are reported only if the call fails. On success the
    /// matching completion is logged and the value passed through; on failure
    /// the error record is logged and the original error returned, never
    /// swallowed or transformed.
    pub fn invoke<R, E, F>(&self, label: &str, params: &[String], call: F) -> Result<R, E>
    where
        E: Error,
        F: FnOnce() -> Result<R, E>,
    {
        let status = self.trace.begin(label);
        match call() {
            Ok(value) => {
                self.trace.end(status);
                Ok(value)
            }
            Err(error) => {
                self.trace.exception(status, &error, params);
                Err(error)
            }
        }
    }

    /// Failure report for hosts that stage begin and completion separately.
    ///
    /// Middleware-style integrations hold the status between hook points; if
    /// a failure must be reported and the status is unexpectedly absent, a
    /// warning is logged and a fresh root status is synthesized under
    /// `label`, so the error record is still complete and well-formed.
    pub fn report_failure(
        &self,
        status: Option<TraceStatus>,
        label: &str,
        error: &dyn Error,
        params: &[String],
    ) {
        let status = status.unwrap_or_else(|| {
            warn!(label, "trace status missing at failure report, synthesizing one");
            TraceStatus::new(TraceId::new(), label)
        });
        self.trace.exception(status, error, params);
    }
}

/// Shortens a type path to its last segment, for building `Type.method`
/// labels: `short_type_name::<OrderService>()` is `"OrderService"`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("Unknown")
}
