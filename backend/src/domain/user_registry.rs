//! User registry service implementing the [`UserRegistry`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{UserPersistenceError, UserRegistry, UserRepository};
use crate::domain::{Error, User, Username};

/// Registers and lists users on top of a [`UserRepository`].
#[derive(Clone)]
pub struct UserRegistryService<R> {
    users: Arc<R>,
}

impl<R> UserRegistryService<R> {
    /// Create a registry backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

pub(crate) fn map_user_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
    error!(operation, error = %err, "user storage failure");
    Error::internal(format!("{operation} failed: {err}"))
}

#[async_trait]
impl<R> UserRegistry for UserRegistryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        let user = User::register(username);
        self.users
            .insert(&user)
            .await
            .map_err(|err| map_user_persistence_error("create user", err))?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_all()
            .await
            .map_err(|err| map_user_persistence_error("list users", err))
    }
}
