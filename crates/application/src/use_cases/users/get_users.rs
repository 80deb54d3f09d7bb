use parkway_domain::{DomainError, User};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::UserRepository;

pub struct GetUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.get_all().await
    }
}
