//! Adapters for external systems: SQLite storage and the report cache.

pub mod cache;
pub mod sqlite;
