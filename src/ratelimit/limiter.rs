//! Sliding Window Limiter
//!
//! Counts the hits inside a moving window per limiter key; a request is
//! admitted while fewer than `max_requests` hits fall inside the window.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clock::Clock;

// == Sliding Window Limiter ==
/// Sliding-window request limiter with an injected clock.
///
/// Hit timestamps (Unix ms) are kept per key in a deque, oldest at the front.
/// On every acquisition attempt the window is pruned first, so memory per key
/// is bounded by `max_requests`.
pub struct SlidingWindowLimiter {
    /// Maximum admitted requests per window
    max_requests: u32,
    /// Window length in milliseconds
    window_ms: u64,
    /// Hit timestamps per limiter key
    hits: Mutex<HashMap<String, VecDeque<u64>>>,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl SlidingWindowLimiter {
    // == Constructor ==
    /// Creates a limiter admitting `max_requests` per `window_secs` seconds.
    pub fn new(max_requests: u32, window_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            max_requests,
            window_ms: window_secs * 1000,
            hits: Mutex::new(HashMap::new()),
            clock,
        }
    }

    // == Try Acquire ==
    /// Attempts to admit one request under `key`.
    ///
    /// Returns `true` and records the hit when the key has capacity left in
    /// the current window; returns `false` without recording otherwise.
    /// Distinct keys are limited independently.
    pub async fn try_acquire(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let window_start = now.saturating_sub(self.window_ms);

        let mut hits = self.hits.lock().await;
        let window = hits.entry(key.to_string()).or_default();

        // Drop hits that have slid out of the window
        while window.front().is_some_and(|&t| t <= window_start) {
            window.pop_front();
        }

        if window.len() < self.max_requests as usize {
            window.push_back(now);
            true
        } else {
            false
        }
    }
}
