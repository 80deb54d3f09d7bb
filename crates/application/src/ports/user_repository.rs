use async_trait::async_trait;
use parkway_domain::{DomainError, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a user and returns it with its assigned id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    async fn get_all(&self) -> Result<Vec<User>, DomainError>;
}
