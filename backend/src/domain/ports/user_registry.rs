//! Driving port for registering and listing users.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Use cases of the user registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Register a user under a freshly generated identifier.
    async fn create_user(&self, username: Username) -> Result<User, Error>;

    /// Every registered user in store order. An empty store yields an empty
    /// list.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
