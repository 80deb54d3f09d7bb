use parkway_domain::{DomainError, NewVehicle, Vehicle};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VehicleRepository;

pub struct RegisterVehicleUseCase {
    vehicle_repo: Arc<dyn VehicleRepository>,
}

impl RegisterVehicleUseCase {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicle_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: NewVehicle) -> Result<Vehicle, DomainError> {
        let vehicle = Vehicle::register(input)?;

        if self.vehicle_repo.exists(&vehicle.plate).await? {
            return Err(DomainError::Conflict(format!(
                "Vehicle {} is already registered",
                vehicle.plate
            )));
        }

        let vehicle = self.vehicle_repo.create(vehicle).await?;

        info!(
            plate = %vehicle.plate,
            parking_spot = %vehicle.parking_spot,
            "Vehicle registered"
        );

        Ok(vehicle)
    }
}
