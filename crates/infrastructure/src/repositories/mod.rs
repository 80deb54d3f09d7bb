pub mod cell_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use cell_repository::InMemoryCellRepository;
pub use user_repository::InMemoryUserRepository;
pub use vehicle_repository::InMemoryVehicleRepository;

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
