//! Database Module
//!
//! SQLite persistence for notes: pool construction, schema setup, and the
//! repository the handlers read through.

mod connection;
mod notes_repo;

// Re-export public types
pub use connection::{connect, init_schema};
pub use notes_repo::NotesRepository;
