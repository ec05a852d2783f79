//! Runs the sample order service with the full trace pipeline attached.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin demo
//! ```

use calltrace::lifecycle::tracing::setup_tracing;
use calltrace::lifecycle::TraceSystem;
use calltrace::model::OrderRequest;
use calltrace::order_service::OrderService;
use tracing::{error, info};

fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the order demo with call tracing");

    let system = TraceSystem::from_env();
    let service = OrderService::new(system.interceptor());

    // A request that succeeds: renders the full begin/complete tree.
    let request = OrderRequest::new("WIDGET-1", 5, 25.5);
    match service.place_order(&request) {
        Ok(order) => info!(order_id = %order.id, total = order.total, "Order placed"),
        Err(e) => error!(error = %e, "Order unexpectedly failed"),
    }

    // A request that fails two levels deep: renders indented error records
    // at every level on the way out.
    let oversized = OrderRequest::new("WIDGET-1", 500, 25.5);
    if let Err(e) = service.place_order(&oversized) {
        error!(error = %e, "Order rejected");
    }
}
