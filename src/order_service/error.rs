//! Error types for the order service.

use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// There is insufficient stock to fulfill the order.
    #[error("Insufficient stock for {sku}: requested {requested}, available {available}")]
    InsufficientStock {
        sku: String,
        requested: u32,
        available: u32,
    },

    /// The order could not be written to the ledger.
    #[error("Order storage error")]
    Storage(#[source] LedgerError),
}

/// Failure raised by the order ledger.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("ledger write failed: {0}")]
pub struct LedgerError(pub String);
