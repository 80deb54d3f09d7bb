use parkway_domain::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or(0),
            name: user.name.to_string(),
            email: user.email.as_ref().map(|s| s.to_string()),
            role: user.role.as_ref().map(|s| s.to_string()),
            created_at: user.created_at,
        }
    }
}

/// Request DTO for registering a user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}
