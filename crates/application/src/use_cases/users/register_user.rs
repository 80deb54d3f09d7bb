use parkway_domain::{DomainError, User};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::UserRepository;

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: String,
        email: Option<String>,
        role: Option<String>,
    ) -> Result<User, DomainError> {
        let user = User::new(name, email, role);
        user.validate()?;

        let user = self.user_repo.create(user).await?;

        info!(user_id = ?user.id, name = %user.name, "User registered");

        Ok(user)
    }
}
