mod get_users;
mod register_user;

pub use get_users::GetUsersUseCase;
pub use register_user::RegisterUserUseCase;
