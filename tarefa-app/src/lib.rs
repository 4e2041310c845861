//! # Tarefa App
//!
//! Session and screen flow for the Tarefa desktop task manager. The
//! embedding shell renders screens and dialogs; every user-initiated
//! action goes through [`session::SessionFlow`], which validates input,
//! calls the store, and reports results as data the shell can draw.
//!
//! ## Modules
//!
//! - `config`: environment-based configuration
//! - `validate`: email policy and input checks
//! - `session`: the flow state machine
//! - `error`: flow errors and their dialog payloads

pub mod config;
pub mod error;
pub mod session;
pub mod validate;
