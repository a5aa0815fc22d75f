//! Wiring of services to the configured storage backend.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::domain::{ExerciseLogService, UserRegistryService};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

fn wire<U, E>(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> HttpState
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
{
    let registry = Arc::new(UserRegistryService::new(users.clone()));
    let log = Arc::new(ExerciseLogService::new(users, exercises, clock));
    HttpState::new(registry, log.clone(), log)
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!(backend = "postgres", "storage selected");
            wire(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselExerciseRepository::new(pool.clone())),
                clock,
            )
        }
        None => {
            info!(backend = "memory", "storage selected");
            let store = Arc::new(InMemoryStore::new());
            wire(store.clone(), store, clock)
        }
    }
}
