use parkway_domain::{DomainError, Plate, Vehicle};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::VehicleRepository;

pub struct GetVehiclesUseCase {
    vehicle_repo: Arc<dyn VehicleRepository>,
}

impl GetVehiclesUseCase {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicle_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        self.vehicle_repo.get_all().await
    }

    /// Looks a vehicle up by any spelling of its plate.
    #[instrument(skip(self))]
    pub async fn get_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DomainError> {
        let plate = Plate::parse(plate)?;
        self.vehicle_repo.get_by_plate(&plate).await
    }
}
