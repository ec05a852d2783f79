//! Pure data structures (DTOs) used by the sample service.

pub mod order;

pub use order::*;
