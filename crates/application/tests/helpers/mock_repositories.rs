#![allow(dead_code)]

use async_trait::async_trait;
use parkway_application::ports::{CellRepository, UserRepository, VehicleRepository};
use parkway_domain::{
    Cell, DomainError, NewVehicle, PaymentUpdate, Plate, User, Vehicle,
};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn make_vehicle(plate: &str) -> Vehicle {
    Vehicle::register(NewVehicle {
        plate: plate.to_string(),
        vehicle_type: "carro".to_string(),
        brand: "Renault".to_string(),
        model: "Logan".to_string(),
        color: "Gris".to_string(),
        parking_spot: "A1".to_string(),
        status: "Activo".to_string(),
        user: "Camilo".to_string(),
        novelty: String::new(),
    })
    .unwrap()
}

// ============================================================================
// Mock VehicleRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockVehicleRepository {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
}

impl MockVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let repo = Self::new();
        *repo.vehicles.write().await = vehicles;
        repo
    }

    pub async fn count(&self) -> usize {
        self.vehicles.read().await.len()
    }

    pub async fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.clone()
    }
}

#[async_trait]
impl VehicleRepository for MockVehicleRepository {
    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, DomainError> {
        let mut vehicles = self.vehicles.write().await;
        if vehicles.iter().any(|v| v.plate == vehicle.plate) {
            return Err(DomainError::Conflict(vehicle.plate.to_string()));
        }
        vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn get_by_plate(&self, plate: &Plate) -> Result<Option<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| &v.plate == plate).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn exists(&self, plate: &Plate) -> Result<bool, DomainError> {
        Ok(self.vehicles.read().await.iter().any(|v| &v.plate == plate))
    }

    async fn apply_payment(
        &self,
        plate: &Plate,
        update: PaymentUpdate,
    ) -> Result<Vehicle, DomainError> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| &v.plate == plate)
            .ok_or_else(|| DomainError::NotFound(format!("Vehicle {plate} not found")))?;
        vehicle.apply_payment(update);
        Ok(vehicle.clone())
    }
}

// ============================================================================
// Mock UserRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        user.id = Some(users.len() as i64 + 1);
        users.push(user.clone());
        Ok(user)
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}

// ============================================================================
// Mock CellRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockCellRepository {
    cells: Arc<RwLock<Vec<Cell>>>,
}

impl MockCellRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CellRepository for MockCellRepository {
    async fn create(&self, cell: Cell) -> Result<Cell, DomainError> {
        let mut cells = self.cells.write().await;
        if cells.iter().any(|c| c.number == cell.number) {
            return Err(DomainError::Conflict(format!(
                "Cell {} already exists",
                cell.number
            )));
        }
        cells.push(cell.clone());
        Ok(cell)
    }

    async fn get_by_number(&self, number: &str) -> Result<Option<Cell>, DomainError> {
        let number = Cell::normalize_number(number);
        let cells = self.cells.read().await;
        Ok(cells.iter().find(|c| c.number.as_ref() == number).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Cell>, DomainError> {
        Ok(self.cells.read().await.clone())
    }
}
