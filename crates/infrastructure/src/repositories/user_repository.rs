use async_trait::async_trait;
use parkway_application::ports::UserRepository;
use parkway_domain::{DomainError, User};
use tokio::sync::RwLock;
use tracing::instrument;

use super::now_timestamp;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user), fields(name = %user.name))]
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let next_id = users.iter().filter_map(|u| u.id).max().unwrap_or(0) + 1;
        user.id = Some(next_id);
        user.created_at = Some(now_timestamp());

        users.push(user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}
