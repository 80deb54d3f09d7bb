use async_trait::async_trait;
use parkway_domain::{DomainError, PaymentUpdate, Plate, Vehicle};

/// Repository interface for registered vehicles.
///
/// The repository is the only owner of vehicle records. Plates are stored in
/// normalized form, so lookups by any spelling of the same plate hit the same
/// record.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Stores a newly registered vehicle.
    ///
    /// # Errors
    ///
    /// * `DomainError::Conflict` - If a vehicle with the same plate exists
    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, DomainError>;

    /// Retrieves a vehicle by plate.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Vehicle))` - If the vehicle exists
    /// * `Ok(None)` - If no vehicle has this plate
    async fn get_by_plate(&self, plate: &Plate) -> Result<Option<Vehicle>, DomainError>;

    /// Retrieves all vehicles in registration order.
    async fn get_all(&self) -> Result<Vec<Vehicle>, DomainError>;

    async fn exists(&self, plate: &Plate) -> Result<bool, DomainError>;

    /// Writes the billing fields of a payment onto the vehicle.
    ///
    /// Lookup and write happen as one step: either every billing field is
    /// replaced or the record is left untouched.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - If no vehicle has this plate
    async fn apply_payment(
        &self,
        plate: &Plate,
        update: PaymentUpdate,
    ) -> Result<Vehicle, DomainError>;
}
