//! # Observability Setup
//!
//! Subscriber initialization for applications embedding the trace pipeline.
//!
//! The trace manager itself only hands rendered lines to the `tracing`
//! macros; [`setup_tracing`] installs the subscriber that actually prints
//! them. Library users that already run their own subscriber can skip this.

/// Initializes the `tracing` subscriber for the application.
///
/// This sets up structured logging with:
/// - **Environment-based filtering**: controlled via the `RUST_LOG` variable
/// - **Human-readable formatting**: timestamps and log levels on every line
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control verbosity:
/// - `RUST_LOG=info` - the trace tree plus info and above
/// - `RUST_LOG=calltrace=info` - only this crate's output
/// - `RUST_LOG=error` - error records only
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    // Initialize the tracing subscriber with environment-based filtering
    // so users control log levels via the RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
