use parkway_application::use_cases::{
    GetCellsUseCase, GetUsersUseCase, GetVehiclesUseCase, QuoteFeeUseCase, RegisterCellUseCase,
    RegisterPaymentUseCase, RegisterUserUseCase, RegisterVehicleUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_vehicles: Arc<GetVehiclesUseCase>,
    pub register_vehicle: Arc<RegisterVehicleUseCase>,
    pub get_users: Arc<GetUsersUseCase>,
    pub register_user: Arc<RegisterUserUseCase>,
    pub get_cells: Arc<GetCellsUseCase>,
    pub register_cell: Arc<RegisterCellUseCase>,
    pub register_payment: Arc<RegisterPaymentUseCase>,
    pub quote_fee: Arc<QuoteFeeUseCase>,
}
