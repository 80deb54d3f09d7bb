use parkway_infrastructure::repositories::{
    InMemoryCellRepository, InMemoryUserRepository, InMemoryVehicleRepository,
};
use std::sync::Arc;

/// Process-wide stores, created at startup and dropped at exit.
pub struct Repositories {
    pub vehicles: Arc<InMemoryVehicleRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub cells: Arc<InMemoryCellRepository>,
}

impl Repositories {
    pub fn new() -> Self {
        Self {
            vehicles: Arc::new(InMemoryVehicleRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            cells: Arc::new(InMemoryCellRepository::new()),
        }
    }
}

impl Default for Repositories {
    fn default() -> Self {
        Self::new()
    }
}
