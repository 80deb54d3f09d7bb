use parkway_domain::{
    BillingPolicy, DomainError, PaymentReceipt, PaymentRequest, PaymentUpdate,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::VehicleRepository;

/// Use case for registering a payment when a vehicle leaves.
///
/// Computes the fee for the entry/exit pair and writes status, times and
/// total onto the vehicle matched by normalized plate.
pub struct RegisterPaymentUseCase {
    vehicle_repo: Arc<dyn VehicleRepository>,
    policy: BillingPolicy,
}

impl RegisterPaymentUseCase {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepository>, policy: BillingPolicy) -> Self {
        Self {
            vehicle_repo,
            policy,
        }
    }

    /// Registers a payment.
    ///
    /// # Returns
    ///
    /// * `Ok(PaymentReceipt)` - The billing fields now stored on the vehicle
    /// * `Err(DomainError)` - If the request is rejected
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - If a required field is empty or the status is unknown
    /// * `DomainError::MalformedTime` - If entry or exit is not a valid `HH:MM` time
    /// * `DomainError::NotFound` - If no vehicle has this plate
    ///
    /// No vehicle is modified when an error is returned.
    #[instrument(skip(self))]
    pub async fn execute(&self, request: PaymentRequest) -> Result<PaymentReceipt, DomainError> {
        let payment = request.validate()?;
        let quote = self.policy.quote(payment.entry_time, payment.exit_time);

        let update = PaymentUpdate {
            status: payment.status,
            entry_time: payment.entry_time,
            exit_time: payment.exit_time,
            total: quote.total,
            cell: payment.cell.clone(),
        };

        if let Err(e) = self.vehicle_repo.apply_payment(&payment.plate, update).await {
            warn!(plate = %payment.plate, error = %e, "Payment not registered");
            return Err(e);
        }

        info!(
            plate = %payment.plate,
            status = %payment.status,
            billable_hours = quote.billable_hours,
            total = quote.total.amount(),
            "Payment registered"
        );

        Ok(PaymentReceipt::new(&payment, &quote))
    }
}
