//! Driven port for exercise entry persistence.
use async_trait::async_trait;

use crate::domain::{ExerciseEntry, ExerciseLogFilter};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExerciseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "exercise repository query failed: {message}",
    }
}

/// Storage for [`ExerciseEntry`] records.
///
/// The owning user is referenced by identifier only; adapters must not rely
/// on a database-level foreign key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist a new entry.
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError>;

    /// Entries matching `filter`, in insertion order, at most
    /// `filter.limit` of them.
    async fn find_for_user(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError>;
}
