//! Driving ports for logging exercises and reading a user's log.
//!
//! HTTP handlers copy form and query input into the request types below and
//! render the results. The services behind these traits own the user lookup,
//! field parsing and storage sequencing, in that order: an unknown user is
//! reported before any malformed field.

use async_trait::async_trait;

use crate::domain::{Description, Error, ExerciseEntry, LogLimit, User, UserId};

/// Input for attaching an exercise to a user.
///
/// `duration` and `date` hold the raw client text and are parsed once the
/// user is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExerciseRequest {
    pub user_id: UserId,
    pub description: Description,
    /// Whole minutes; required.
    pub duration: Option<String>,
    /// Absent or blank means "today" according to the service clock.
    pub date: Option<String>,
}

/// Input for reading a user's log. Bounds hold raw client text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQueryRequest {
    pub user_id: UserId,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: LogLimit,
}

impl LogQueryRequest {
    /// Unbounded query for `user_id` with the default cap.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: LogLimit::DEFAULT,
        }
    }
}

/// Outcome of a successful log operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedExercise {
    pub user: User,
    pub entry: ExerciseEntry,
}

/// A user's entries selected by a [`LogQueryRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<ExerciseEntry>,
}

impl ExerciseLog {
    /// Number of returned entries (after the cap, not the total match count).
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Command side: attach an entry to an existing user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogCommand: Send + Sync {
    /// Fails with `not_found` when the user does not exist and with
    /// `invalid_request` when a field does not parse. Nothing is persisted in
    /// either case.
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LoggedExercise, Error>;
}

/// Query side: read a user's filtered log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Fails with `not_found` when the user does not exist, then with
    /// `invalid_request` when a bound does not parse.
    async fn fetch_log(&self, request: LogQueryRequest) -> Result<ExerciseLog, Error>;
}
