pub mod cell;
pub mod payment;
pub mod user;
pub mod vehicle;

pub use cell::{CellResponse, CreateCellRequest};
pub use payment::{PaymentResponse, QuoteRequest, QuoteResponse, RegisterPaymentRequest};
pub use user::{CreateUserRequest, UserResponse};
pub use vehicle::{CreateVehicleRequest, VehicleResponse};
