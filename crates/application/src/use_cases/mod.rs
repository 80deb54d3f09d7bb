pub mod cells;
pub mod payments;
pub mod users;
pub mod vehicles;

// Re-export use cases
pub use cells::{GetCellsUseCase, RegisterCellUseCase};
pub use payments::{QuoteFeeUseCase, RegisterPaymentUseCase};
pub use users::{GetUsersUseCase, RegisterUserUseCase};
pub use vehicles::{GetVehiclesUseCase, RegisterVehicleUseCase};
