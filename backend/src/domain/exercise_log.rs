//! Exercise logging and log query service.
//!
//! Both use cases start with the same user lookup. A missing user ends the
//! request with `not_found` before fields are parsed or anything touches the
//! exercise store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{
    ExerciseLog, ExerciseLogCommand, ExerciseLogQuery, ExerciseRepository,
    ExerciseRepositoryError, LogExerciseRequest, LogQueryRequest, LoggedExercise,
    UserRepository,
};
use crate::domain::user_registry::map_user_persistence_error;
use crate::domain::validation::{DATE, FROM, TO, parse_duration, parse_optional_date};
use crate::domain::{Error, ExerciseDate, ExerciseEntry, ExerciseLogFilter, User, UserId};

/// Message returned when the referenced user does not exist.
pub const USER_NOT_FOUND: &str = "User not found";

/// Service implementing [`ExerciseLogCommand`] and [`ExerciseLogQuery`].
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseLogService<U, E> {
    /// Create a service over the two repositories. `clock` supplies the
    /// default date for entries logged without one.
    pub fn new(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }
}

fn map_exercise_error(operation: &'static str, err: ExerciseRepositoryError) -> Error {
    error!(operation, error = %err, "exercise storage failure");
    Error::internal(format!("{operation} failed: {err}"))
}

impl<U, E> ExerciseLogService<U, E>
where
    U: UserRepository,
{
    async fn require_user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| map_user_persistence_error("find user", err))?
            .ok_or_else(|| {
                debug!(user_id = %id, "user lookup missed");
                Error::not_found(USER_NOT_FOUND)
            })
    }
}

#[async_trait]
impl<U, E> ExerciseLogCommand for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn log_exercise(&self, request: LogExerciseRequest) -> Result<LoggedExercise, Error> {
        let LogExerciseRequest {
            user_id,
            description,
            duration,
            date,
        } = request;
        let user = self.require_user(&user_id).await?;
        let duration = parse_duration(duration.as_deref())?;
        let date = parse_optional_date(DATE, date.as_deref())?
            .unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref()));
        let entry = ExerciseEntry::new(user_id, description, duration, date);

        self.exercises
            .insert(&entry)
            .await
            .map_err(|err| map_exercise_error("log exercise", err))?;
        debug!(user_id = %user_id, date = %date, "exercise logged");

        Ok(LoggedExercise { user, entry })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn fetch_log(&self, request: LogQueryRequest) -> Result<ExerciseLog, Error> {
        let user = self.require_user(&request.user_id).await?;
        let filter = ExerciseLogFilter {
            from: parse_optional_date(FROM, request.from.as_deref())?,
            to: parse_optional_date(TO, request.to.as_deref())?,
            limit: request.limit,
            ..ExerciseLogFilter::for_user(request.user_id)
        };
        let entries = self
            .exercises
            .find_for_user(&filter)
            .await
            .map_err(|err| map_exercise_error("fetch exercise log", err))?;

        Ok(ExerciseLog { user, entries })
    }
}
