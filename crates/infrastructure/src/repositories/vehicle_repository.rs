use async_trait::async_trait;
use parkway_application::ports::VehicleRepository;
use parkway_domain::{DomainError, PaymentUpdate, Plate, Vehicle};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::now_timestamp;

#[derive(Default)]
struct VehicleStore {
    by_plate: HashMap<Plate, Vehicle>,
    // Registration order, for listing.
    order: Vec<Plate>,
}

/// Vehicle store keyed by normalized plate, held for the life of the process.
///
/// Every mutation runs under the write lock, so a payment update is a single
/// read-modify-write that concurrent requests cannot interleave with.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    store: RwLock<VehicleStore>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    #[instrument(skip(self, vehicle), fields(plate = %vehicle.plate))]
    async fn create(&self, mut vehicle: Vehicle) -> Result<Vehicle, DomainError> {
        let mut store = self.store.write().await;

        if store.by_plate.contains_key(&vehicle.plate) {
            return Err(DomainError::Conflict(format!(
                "Vehicle {} is already registered",
                vehicle.plate
            )));
        }

        let now = now_timestamp();
        vehicle.created_at = Some(now.clone());
        vehicle.updated_at = Some(now);

        store.order.push(vehicle.plate.clone());
        store.by_plate.insert(vehicle.plate.clone(), vehicle.clone());

        debug!(total = store.order.len(), "Vehicle stored");
        Ok(vehicle)
    }

    #[instrument(skip(self))]
    async fn get_by_plate(&self, plate: &Plate) -> Result<Option<Vehicle>, DomainError> {
        Ok(self.store.read().await.by_plate.get(plate).cloned())
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|plate| store.by_plate.get(plate).cloned())
            .collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, plate: &Plate) -> Result<bool, DomainError> {
        Ok(self.store.read().await.by_plate.contains_key(plate))
    }

    #[instrument(skip(self, update))]
    async fn apply_payment(
        &self,
        plate: &Plate,
        update: PaymentUpdate,
    ) -> Result<Vehicle, DomainError> {
        let mut store = self.store.write().await;

        let vehicle = store
            .by_plate
            .get_mut(plate)
            .ok_or_else(|| DomainError::NotFound(format!("Vehicle {plate} not found")))?;

        vehicle.apply_payment(update);
        vehicle.updated_at = Some(now_timestamp());

        Ok(vehicle.clone())
    }
}
