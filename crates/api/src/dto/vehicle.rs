use parkway_domain::{NewVehicle, Vehicle};
use serde::{Deserialize, Serialize};

/// Response DTO for a registered vehicle and its last parking session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub parking_spot: String,
    pub status: String,
    pub user: String,
    pub novelty: String,
    pub payment: Option<String>,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>,
    pub total_payment: Option<u64>,
    pub total_payment_display: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            plate: vehicle.plate.to_string(),
            vehicle_type: vehicle.vehicle_type.to_string(),
            brand: vehicle.brand.to_string(),
            model: vehicle.model.to_string(),
            color: vehicle.color.to_string(),
            parking_spot: vehicle.parking_spot.to_string(),
            status: vehicle.status.to_string(),
            user: vehicle.user.to_string(),
            novelty: vehicle.novelty.to_string(),
            payment: vehicle.payment.map(|p| p.to_string()),
            entry_time: vehicle.entry_time.map(|t| t.to_string()),
            exit_time: vehicle.exit_time.map(|t| t.to_string()),
            total_payment: vehicle.total_payment.map(|m| m.amount()),
            total_payment_display: vehicle.total_payment.map(|m| m.to_display_string()),
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// Request DTO for registering a vehicle
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateVehicleRequest {
    pub plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub parking_spot: String,
    pub status: String,
    pub user: String,
    pub novelty: String,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(req: CreateVehicleRequest) -> Self {
        Self {
            plate: req.plate,
            vehicle_type: req.vehicle_type,
            brand: req.brand,
            model: req.model,
            color: req.color,
            parking_spot: req.parking_spot,
            status: req.status,
            user: req.user,
            novelty: req.novelty,
        }
    }
}
