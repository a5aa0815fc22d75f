//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UserRegistry`, `ExerciseLogCommand`, `ExerciseLogQuery`) are
//! consumed by inbound adapters. Driven ports (`UserRepository`,
//! `ExerciseRepository`) are implemented by outbound storage adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log;
mod exercise_repository;
mod user_registry;
mod user_repository;

pub use exercise_log::{
    ExerciseLog, ExerciseLogCommand, ExerciseLogQuery, LogExerciseRequest, LogQueryRequest,
    LoggedExercise,
};
#[cfg(test)]
pub use exercise_log::{MockExerciseLogCommand, MockExerciseLogQuery};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{ExerciseRepository, ExerciseRepositoryError};
#[cfg(test)]
pub use user_registry::MockUserRegistry;
pub use user_registry::UserRegistry;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
