//! Database layer: SQLite connection pool and schema migrations.
//!
//! The models live in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
