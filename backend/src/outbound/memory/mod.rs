//! In-memory document store.
//!
//! Implements both repository ports over two vectors guarded by a single
//! mutex. Used when no database URL is configured and as the storage behind
//! HTTP tests. Contents are lost when the process exits.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ExerciseRepository, ExerciseRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{ExerciseEntry, ExerciseLogFilter, User, UserId};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<ExerciseEntry>,
}

/// Process-local store for users and exercise entries.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ports::UserRepository;
/// use exercise_tracker::domain::{User, Username};
/// use exercise_tracker::outbound::memory::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// let user = User::register(Username::new("alice"));
/// store.insert(&user).await.expect("insert");
/// assert_eq!(store.find_by_id(user.id()).await.expect("lookup"), Some(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Collections>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The guard is always dropped before any await point.
    fn lock(&self) -> Result<MutexGuard<'_, Collections>, &'static str> {
        self.inner.lock().map_err(|_| POISONED)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.lock()
            .map_err(UserPersistenceError::query)?
            .users
            .push(user.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock().map_err(UserPersistenceError::query)?.users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let guard = self.lock().map_err(UserPersistenceError::query)?;
        Ok(guard.users.iter().find(|user| user.id() == id).cloned())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError> {
        self.lock()
            .map_err(ExerciseRepositoryError::query)?
            .exercises
            .push(entry.clone());
        Ok(())
    }

    async fn find_for_user(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError> {
        let guard = self.lock().map_err(ExerciseRepositoryError::query)?;
        Ok(guard
            .exercises
            .iter()
            .filter(|entry| filter.matches(entry))
            .take(filter.max_entries())
            .cloned()
            .collect())
    }
}
