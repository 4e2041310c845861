//! Database models.
//!
//! - `user`: registered accounts, looked up during authentication
//! - `task`: a titled, described unit of work owned by exactly one user

pub mod task;
pub mod user;
