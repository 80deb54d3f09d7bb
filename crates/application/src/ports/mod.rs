mod cell_repository;
mod user_repository;
mod vehicle_repository;

pub use cell_repository::CellRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
