//! Taskboard server library.
//!
//! Exposes the HTTP API, the board page, and configuration loading for use
//! in tests and embedding. The server holds a single in-memory
//! [`taskboard::tasks::TaskStore`] behind a lock and translates REST requests
//! into store calls.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod validation;
