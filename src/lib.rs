//! notelite - A lightweight note-taking REST service
//!
//! CRUD endpoints for notes over SQLite, fronted by a read-through TTL cache
//! with write-invalidation and a sliding-window rate limiter.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ratelimit;

pub use api::AppState;
pub use config::Config;
