use super::Repositories;
use parkway_api::AppState;
use parkway_application::use_cases::{
    GetCellsUseCase, GetUsersUseCase, GetVehiclesUseCase, QuoteFeeUseCase, RegisterCellUseCase,
    RegisterPaymentUseCase, RegisterUserUseCase, RegisterVehicleUseCase,
};
use parkway_domain::BillingPolicy;
use std::sync::Arc;

pub struct UseCases {
    pub get_vehicles: Arc<GetVehiclesUseCase>,
    pub register_vehicle: Arc<RegisterVehicleUseCase>,
    pub get_users: Arc<GetUsersUseCase>,
    pub register_user: Arc<RegisterUserUseCase>,
    pub get_cells: Arc<GetCellsUseCase>,
    pub register_cell: Arc<RegisterCellUseCase>,
    pub register_payment: Arc<RegisterPaymentUseCase>,
    pub quote_fee: Arc<QuoteFeeUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, policy: BillingPolicy) -> Self {
        Self {
            get_vehicles: Arc::new(GetVehiclesUseCase::new(repos.vehicles.clone())),
            register_vehicle: Arc::new(RegisterVehicleUseCase::new(repos.vehicles.clone())),
            get_users: Arc::new(GetUsersUseCase::new(repos.users.clone())),
            register_user: Arc::new(RegisterUserUseCase::new(repos.users.clone())),
            get_cells: Arc::new(GetCellsUseCase::new(repos.cells.clone())),
            register_cell: Arc::new(RegisterCellUseCase::new(repos.cells.clone())),
            register_payment: Arc::new(RegisterPaymentUseCase::new(
                repos.vehicles.clone(),
                policy,
            )),
            quote_fee: Arc::new(QuoteFeeUseCase::new(policy)),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            get_vehicles: self.get_vehicles,
            register_vehicle: self.register_vehicle,
            get_users: self.get_users,
            register_user: self.register_user,
            get_cells: self.get_cells,
            register_cell: self.register_cell,
            register_payment: self.register_payment,
            quote_fee: self.quote_fee,
        }
    }
}
