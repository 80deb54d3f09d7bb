mod get_vehicles;
mod register_vehicle;

pub use get_vehicles::GetVehiclesUseCase;
pub use register_vehicle::RegisterVehicleUseCase;
