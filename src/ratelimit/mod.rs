//! Rate Limiting Module
//!
//! Sliding-window request limiting for the notes API.

mod limiter;
mod middleware;

// Re-export public types
pub use limiter::SlidingWindowLimiter;
pub use middleware::rate_limit;
