//! Request validation in front of the task store.
//!
//! Shape and type checks (enum names, timestamps, non-negative `order`) are
//! done by serde while extracting the body. This module adds the rules serde
//! cannot express and turns raw query strings into a [`TaskFilter`], so only
//! well-formed input ever reaches the store.

use std::str::FromStr;

use serde::Deserialize;
use taskboard::tasks::TaskFilter;
use taskboard_proto::input::{NewTask, TaskPatch};
use taskboard_proto::task::{ParseEnumError, TaskId};

use crate::error::ApiError;

/// Raw query parameters of `GET /api/tasks`.
///
/// Kept as strings so that empty values (`?status=`) can be treated as
/// absent instead of failing enum parsing.
#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    /// Lane name, e.g. `IN_PROGRESS`.
    pub status: Option<String>,
    /// Priority name, e.g. `HIGH`.
    pub priority: Option<String>,
    /// Exact assignee.
    pub assignee: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl TaskQuery {
    /// Converts the query into a store filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `status` or `priority` is present
    /// but not a recognised name.
    pub fn into_filter(self) -> Result<TaskFilter, ApiError> {
        Ok(TaskFilter {
            status: parse_optional(self.status)?,
            priority: parse_optional(self.priority)?,
            assignee: non_empty(self.assignee),
            search: non_empty(self.search),
        })
    }
}

/// Checks a create request.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if the title is empty.
pub fn check_new_task(input: &NewTask) -> Result<(), ApiError> {
    require_title(&input.title)
}

/// Checks an update request.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if a title is given but empty.
pub fn check_patch(patch: &TaskPatch) -> Result<(), ApiError> {
    patch.title.as_deref().map_or(Ok(()), require_title)
}

/// Parses a task id from a path segment.
///
/// Ids that are not well-formed cannot name any task, so they are reported
/// as not found rather than as bad input.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if `raw` is not a valid id.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

fn require_title(title: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::validation("title must not be empty"));
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = ParseEnumError>,
{
    non_empty(value)
        .map(|v| v.parse::<T>())
        .transpose()
        .map_err(|e| ApiError::validation(e.to_string()))
}
