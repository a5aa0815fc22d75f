//! Helpers shared by unit tests and the integration suite.
//!
//! Compiled for tests and behind the `test-support` feature.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{ExerciseLogService, UserRegistryService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Noon UTC on the given calendar date.
    ///
    /// # Panics
    /// Panics when the date does not exist.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid fixed date {year}-{month}-{day}"));
        Self(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap_or_default()))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Wire the real services to a fresh [`InMemoryStore`].
pub fn in_memory_http_state(clock: Arc<dyn Clock>) -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    let registry = Arc::new(UserRegistryService::new(store.clone()));
    let exercises = Arc::new(ExerciseLogService::new(store.clone(), store, clock));
    HttpState::new(registry, exercises.clone(), exercises)
}
