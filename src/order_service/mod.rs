//! Sample order-placement service with its calls wired through the
//! interceptor.
//!
//! Placing an order walks three traced layers (`place_order` at the root,
//! with `validate` and `reserve_stock` nested below it), so a single request
//! renders the full tree: banners, start/complete arrows, and indented error
//! records carrying the call parameters on the failure paths.

pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::intercept::{short_type_name, CallInterceptor};
use crate::model::{Order, OrderRequest};

/// Stock available per SKU before orders start failing.
const STOCK_PER_SKU: u32 = 100;

/// Largest order total the ledger accepts.
const LEDGER_CAP: f64 = 10_000.0;

/// Places orders, with every step traced.
pub struct OrderService {
    interceptor: CallInterceptor,
    next_order_id: AtomicU64,
}

impl OrderService {
    /// Creates a service whose calls are traced through `interceptor`.
    pub fn new(interceptor: CallInterceptor) -> Self {
        Self {
            interceptor,
            next_order_id: AtomicU64::new(1),
        }
    }

    /// Validates and persists `request`, returning the stored order.
    ///
    /// This is the root of the traced request: everything it calls shows up
    /// nested under it in the log.
    pub fn place_order(&self, request: &OrderRequest) -> Result<Order, OrderError> {
        let label = format!("{}.place_order", short_type_name::<Self>());
        let params = vec![format!("{:?}", request)];
        self.interceptor.invoke(&label, &params, || {
            self.validate(request)?;
            self.persist(request)
        })
    }

    fn validate(&self, request: &OrderRequest) -> Result<(), OrderError> {
        let label = format!("{}.validate", short_type_name::<Self>());
        let params = vec![request.sku.clone(), request.quantity.to_string()];
        self.interceptor.invoke(&label, &params, || {
            if request.sku.trim().is_empty() {
                return Err(OrderError::Validation("sku must not be empty".into()));
            }
            if request.quantity == 0 {
                return Err(OrderError::Validation("quantity must be positive".into()));
            }
            self.reserve_stock(request)
        })
    }

    fn reserve_stock(&self, request: &OrderRequest) -> Result<(), OrderError> {
        let label = format!("{}.reserve_stock", short_type_name::<Self>());
        let params = vec![request.sku.clone(), request.quantity.to_string()];
        self.interceptor.invoke(&label, &params, || {
            if request.quantity > STOCK_PER_SKU {
                return Err(OrderError::InsufficientStock {
                    sku: request.sku.clone(),
                    requested: request.quantity,
                    available: STOCK_PER_SKU,
                });
            }
            Ok(())
        })
    }

    fn persist(&self, request: &OrderRequest) -> Result<Order, OrderError> {
        let label = format!("{}.persist", short_type_name::<Self>());
        let total = f64::from(request.quantity) * request.unit_price;
        let params = vec![request.sku.clone(), format!("{}", total)];
        self.interceptor.invoke(&label, &params, || {
            if total > LEDGER_CAP {
                return Err(OrderError::Storage(LedgerError(format!(
                    "total {} exceeds the ledger cap {}",
                    total, LEDGER_CAP
                ))));
            }
            let id = self.next_order_id.fetch_add(1, Ordering::SeqCst);
            Ok(Order {
                id: format!("order_{}", id),
                sku: request.sku.clone(),
                quantity: request.quantity,
                total,
            })
        })
    }
}
