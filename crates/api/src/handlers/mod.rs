pub mod cells;
pub mod health;
pub mod payments;
pub mod users;
pub mod vehicles;

pub use health::health_check;
