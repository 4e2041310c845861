//! # Tarefa Core
//!
//! Persistence layer for the Tarefa desktop task manager: the SQLite
//! store, its schema migrations, the user/task models, and password
//! hashing. The presentation layer never touches this crate directly;
//! it goes through the session flow in `tarefa-app`.
//!
//! ## Module Organization
//!
//! - `db`: connection pool and migrations
//! - `models`: user and task rows with their CRUD operations
//! - `auth`: password hashing and verification
//! - `store`: the `Store` facade exposing the operations the flow
//!   controller calls

pub mod auth;
pub mod db;
pub mod models;
pub mod store;

pub use db::pool::StoreConfig;
pub use store::{RegisterOutcome, Store, StoreError};

/// Current version of the tarefa core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
