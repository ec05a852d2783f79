#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Calltrace
//!
//! > **A hierarchical call-trace logging harness for Rust.**
//!
//! This crate instruments method invocations to produce a human-readable
//! execution trace: one line when a traced call begins, one line when it
//! completes (or fails), indented to reflect call depth, and grouped under a
//! single per-request identifier. It is a lightweight, in-process alternative
//! to full distributed tracing: no network propagation, no storage, no
//! sampling. Just a call-depth-aware logging harness bound to the thread that
//! is currently running.
//!
//! A traced request renders like this:
//!
//! ```text
//! [b7a9c4e1] === REQ START===
//! [b7a9c4e1] OrderService.place_order
//! [b7a9c4e1] |-> OrderService.validate
//! [b7a9c4e1] |   |-> OrderService.reserve_stock
//! [b7a9c4e1] |   |<- OrderService.reserve_stock
//! [b7a9c4e1] |<- OrderService.validate
//! [b7a9c4e1] OrderService.place_order
//! [b7a9c4e1] === RES COMPLETE===
//! ```
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why explicit interception?
//!
//! There is no reflection, proxying, or code generation anywhere: the host
//! wraps a call site explicitly with a [`CallInterceptor`](intercept::CallInterceptor),
//! passing a display label, the rendered argument values, and a closure that
//! does the work. What you trace is exactly what you wrapped, and the wrapped
//! call's outcome is returned bit-for-bit unchanged.
//!
//! ### Why thread-bound state?
//!
//! The current trace identifier lives in thread-local storage owned by the
//! engine. No locking, no cross-thread visibility: two threads tracing at
//! once get two independent trees with two distinct tokens. The trade-off is
//! the caller contract that every `begin` is matched by exactly one
//! completion on the same thread, which the interceptor guarantees by
//! construction, including on error paths.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use calltrace::framework::ThreadLocalTrace;
//! use calltrace::intercept::CallInterceptor;
//!
//! let interceptor = CallInterceptor::new(Arc::new(ThreadLocalTrace::new()));
//! let total = interceptor
//!     .invoke::<_, std::io::Error, _>("checkout", &[], || Ok(41 + 1))
//!     .unwrap();
//! assert_eq!(total, 42);
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The core of the system: the per-request identifier, the
//! begin/end/exception contract, and the thread-bound manager that renders
//! every line.
//! - **Role**: owns all trace state and every formatting/emission decision.
//! - **Key items**: [`TraceId`](framework::TraceId),
//!   [`LogTrace`](framework::LogTrace),
//!   [`ThreadLocalTrace`](framework::ThreadLocalTrace).
//!
//! ### 2. The Wrapper ([`intercept`])
//! We don't expose begin/end bookkeeping to application code.
//! - **Role**: pairs every `begin` with its completion and passes the wrapped
//!   call's outcome through untouched.
//! - **Key items**: [`CallInterceptor`](intercept::CallInterceptor).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Wires the pipeline together.
//! - **Role**: builds the manager over the chosen sink and options, and owns
//!   subscriber setup for applications.
//! - **Key items**: [`TraceSystem`](lifecycle::TraceSystem),
//!   [`setup_tracing`](lifecycle::tracing::setup_tracing).
//!
//! ### 4. The Sample ([`model`], [`order_service`])
//! A small order-placement service showing the harness on a real call tree,
//! nested three levels deep with deterministic failure paths.
//!
//! ## 🧪 Testing
//!
//! The engine is generic over its sink; tests swap in
//! [`MemorySink`](framework::MemorySink) and assert on the exact emitted
//! lines. See the [`framework::mock`] module.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run --bin demo
//! ```

pub mod framework;
pub mod intercept;
pub mod lifecycle;
pub mod model;
pub mod order_service;
