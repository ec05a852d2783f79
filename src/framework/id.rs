//! # Trace Identifier
//!
//! The `TraceId` ties every line of one logical request together. It carries
//! the transaction token (shared by the whole request) and the nesting depth
//! of the call that is currently being traced.

use uuid::Uuid;

/// Identifies one logical request and the nesting depth of the current call.
///
/// # Architecture Note
/// Why a token *and* a depth in one value?
/// Every traced call within a request logs under the same token, so a reader
/// can grep one request out of interleaved output. The depth is what turns a
/// flat log into a tree: it drives the indentation of each line.
///
/// The derivation methods are pure: they return a new `TraceId` and never
/// mutate in place. The thread-bound manager swaps values in and out of its
/// per-thread slot instead of mutating a shared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId {
    token: String,
    depth: u32,
}

impl TraceId {
    /// Creates a fresh root identifier (depth 0) with a newly generated token.
    pub fn new() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(8);
        Self { token, depth: 0 }
    }

    /// Same token, one level deeper. Used when a nested call begins.
    pub fn next_level(&self) -> Self {
        Self {
            token: self.token.clone(),
            depth: self.depth + 1,
        }
    }

    /// Same token, one level shallower. Callers must hold `depth > 0`.
    pub fn previous_level(&self) -> Self {
        debug_assert!(self.depth > 0, "previous_level called at the root");
        Self {
            token: self.token.clone(),
            depth: self.depth - 1,
        }
    }

    /// True for the outermost traced call on this thread.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// The transaction token shared by every call in this request.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Nesting depth of the current call, 0 at the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}
