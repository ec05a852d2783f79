use serde::{Deserialize, Serialize};

/// A priced order accepted by
/// [`OrderService`](crate::order_service::OrderService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub sku: String,
    pub quantity: u32,
    pub total: f64,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderRequest {
    /// Creates a new order request.
    pub fn new(sku: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            unit_price,
        }
    }
}
