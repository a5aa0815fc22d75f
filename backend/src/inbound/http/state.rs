//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see driving ports,
//! so they can be exercised against mocks or the in-memory store without any
//! database.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLogCommand, ExerciseLogQuery, UserRegistry};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRegistry>,
    pub exercises: Arc<dyn ExerciseLogCommand>,
    pub logs: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Bundle the three driving ports.
    pub fn new(
        users: Arc<dyn UserRegistry>,
        exercises: Arc<dyn ExerciseLogCommand>,
        logs: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            exercises,
            logs,
        }
    }
}
