use parkway_domain::validators::validate_required;
use parkway_domain::{BillingPolicy, DomainError, FeeQuote, TimeOfDay};
use tracing::{debug, instrument};

/// Computes the fee for an entry/exit pair without touching any vehicle.
pub struct QuoteFeeUseCase {
    policy: BillingPolicy,
}

impl QuoteFeeUseCase {
    pub fn new(policy: BillingPolicy) -> Self {
        Self { policy }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, entry_time: &str, exit_time: &str) -> Result<FeeQuote, DomainError> {
        validate_required("entry_time", entry_time)?;
        validate_required("exit_time", exit_time)?;

        let entry: TimeOfDay = entry_time.parse()?;
        let exit: TimeOfDay = exit_time.parse()?;
        let quote = self.policy.quote(entry, exit);

        debug!(
            elapsed_minutes = quote.elapsed_minutes,
            billable_hours = quote.billable_hours,
            total = quote.total.amount(),
            "Fee quoted"
        );

        Ok(quote)
    }
}
