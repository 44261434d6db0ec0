#![doc = include_str!("../README.md")]
//! fred-middleware
//!
//! Re-exports for middleware wrappers.

mod builder;
mod gate;
mod rate_limited;

pub use crate::builder::ApiBuilder;
pub use crate::gate::RateGate;
pub use crate::rate_limited::{RateLimitMiddleware, RateLimitedApi};
