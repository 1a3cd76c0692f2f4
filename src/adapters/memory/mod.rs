//! In-process adapters with no external storage.

pub mod session_store;

pub use session_store::InMemorySessionStore;
