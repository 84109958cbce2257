//! Shared type definitions for the Taskboard JSON wire format.

pub mod input;
pub mod task;
