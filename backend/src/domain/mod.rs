//! Domain primitives, ports and services.
//!
//! Purpose: model users and their exercise entries independently of HTTP and
//! storage. Types validate on construction; adapters translate to and from
//! their own representations at the edges.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - User, UserId, Username: registered identities.
//! - ExerciseEntry and its value types: logged activities.
//! - ExerciseLogFilter, LogLimit: log selection criteria.
//! - UserRegistryService, ExerciseLogService: driving port implementations.

pub mod error;
pub mod exercise;
pub mod exercise_log;
pub mod log_query;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registry;
mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::exercise::{
    Description, DurationMinutes, ExerciseDate, ExerciseEntry, ExerciseId,
    ExerciseValidationError,
};
pub use self::exercise_log::{ExerciseLogService, USER_NOT_FOUND};
pub use self::log_query::{ExerciseLogFilter, LogLimit};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_registry::UserRegistryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
