//! Taskboard core: the in-memory task collection and its lane ordering.

pub mod tasks;
