//! Exercise entries and their value types.
//!
//! Dates are calendar dates in UTC. Input accepts `YYYY-MM-DD`, an RFC 3339
//! timestamp (its UTC date is kept) or an ISO 8601 datetime without offset
//! (read as UTC); output uses the fixed, locale independent form
//! `Mon Jan 01 1990`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use uuid::Uuid;

use super::UserId;

const HUMAN_DATE_FORMAT: &str = "%a %b %d %Y";
const DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Validation errors raised while shaping exercise input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseValidationError {
    #[error("duration is required")]
    MissingDuration,
    #[error("duration must be a whole number of minutes")]
    InvalidDuration { value: String },
    #[error("date must be YYYY-MM-DD or an ISO 8601 timestamp")]
    InvalidDate { value: String },
}

/// Internal identifier of a stored exercise entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Free-text exercise description, stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Wrap a description exactly as supplied.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Exercise duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Wrap a number of minutes.
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Parse user input such as `"30"`. Surrounding whitespace is ignored.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::DurationMinutes;
    ///
    /// assert_eq!(DurationMinutes::parse(" 45 ").map(|d| d.minutes()), Ok(45));
    /// assert!(DurationMinutes::parse("-5").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::MissingDuration);
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDuration {
                value: raw.to_owned(),
            })
    }

    /// Number of minutes.
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

/// Calendar date of an exercise, interpreted in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Wrap a calendar date.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Current UTC date according to `clock`.
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.utc().date_naive())
    }

    /// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a datetime without
    /// offset such as `1990-01-01T10:00`, which is taken to be UTC.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::ExerciseDate;
    ///
    /// let date = ExerciseDate::parse("1990-01-01").expect("valid date");
    /// assert_eq!(date.to_human_string(), "Mon Jan 01 1990");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(timestamp.with_timezone(&Utc).date_naive()));
        }
        LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|datetime| Self(datetime.date()))
            .ok_or_else(|| ExerciseValidationError::InvalidDate {
                value: raw.to_owned(),
            })
    }

    /// Parse an optional form value; absent or blank input yields `None`.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ExerciseValidationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }

    /// Underlying calendar date.
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Human-readable rendering, e.g. `Mon Jan 01 1990`.
    pub fn to_human_string(&self) -> String {
        self.0.format(HUMAN_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(HUMAN_DATE_FORMAT))
    }
}

/// A single logged activity owned by one user.
///
/// ## Invariants
/// - `user_id` referenced an existing user when the entry was created. The
///   link is checked by the logging service, not by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    id: ExerciseId,
    user_id: UserId,
    description: Description,
    duration: DurationMinutes,
    date: ExerciseDate,
}

impl ExerciseEntry {
    /// Create a new entry with a fresh identifier.
    pub fn new(
        user_id: UserId,
        description: Description,
        duration: DurationMinutes,
        date: ExerciseDate,
    ) -> Self {
        Self::from_parts(ExerciseId::random(), user_id, description, duration, date)
    }

    /// Rebuild an entry from stored components.
    pub fn from_parts(
        id: ExerciseId,
        user_id: UserId,
        description: Description,
        duration: DurationMinutes,
        date: ExerciseDate,
    ) -> Self {
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn duration(&self) -> DurationMinutes {
        self.duration
    }

    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
