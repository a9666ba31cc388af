use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::Email};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// All accounts ordered by name.
    async fn list(&self) -> DomainResult<Vec<User>>;
}
