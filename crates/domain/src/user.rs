use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::DomainError;
use crate::validators::{validate_email, validate_max_len, validate_required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub email: Option<Arc<str>>,
    pub role: Option<Arc<str>>,
    pub created_at: Option<String>,
}

impl User {
    pub fn new(name: String, email: Option<String>, role: Option<String>) -> Self {
        Self {
            id: None,
            name: Arc::from(name.trim()),
            email: non_empty(email),
            role: non_empty(role),
            created_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required("User name", &self.name)?;
        validate_max_len("User name", &self.name, 100)?;

        if let Some(email) = &self.email {
            validate_email(email)?;
        }

        if let Some(role) = &self.role {
            validate_max_len("Role", role, 50)?;
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<Arc<str>> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(Arc::from)
}
