//! # LogTrace Trait
//!
//! The capability contract between the interceptor and the trace manager:
//! three operations, nothing else.

use std::error::Error;

use crate::framework::TraceStatus;

/// The begin/end/exception contract every trace manager implements.
///
/// # Architecture Note
/// By defining a contract (`LogTrace`) that the interceptor consumes, the
/// interception side never learns where state lives or where lines go. The
/// shipped implementation is [`ThreadLocalTrace`](crate::framework::ThreadLocalTrace);
/// other implementations can deliver to a different sink as long as they keep
/// the same state rules.
///
/// # Pairing
/// Every `begin` must be matched by exactly one `end` or `exception` on the
/// same thread before that thread's depth can return to its prior value. The
/// trait does not police this at runtime; the interceptor guarantees it by
/// construction.
pub trait LogTrace {
    /// Logs the start of a traced call and returns the status the matching
    /// completion must redeem.
    fn begin(&self, label: &str) -> TraceStatus;

    /// Logs the successful completion of the call that produced `status`.
    fn end(&self, status: TraceStatus);

    /// Logs the failed completion of the call that produced `status`,
    /// including the captured call parameters.
    fn exception(&self, status: TraceStatus, error: &dyn Error, params: &[String]);
}
