use serde::{Deserialize, Serialize};

use crate::billing::{BillingPolicy, ZeroDurationPolicy, DEFAULT_RATE_PER_HOUR};
use crate::money::Money;

/// Parking fee configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BillingConfig {
    /// Charge per started hour, in whole pesos (default: 4000)
    #[serde(default = "default_rate_per_hour")]
    pub rate_per_hour: u64,

    /// Charge for a stay whose entry and exit are the same minute
    /// (default: "bill_minimum_hour")
    #[serde(default)]
    pub zero_duration: ZeroDurationPolicy,
}

impl BillingConfig {
    pub fn policy(&self) -> BillingPolicy {
        BillingPolicy::new(Money::new(self.rate_per_hour), self.zero_duration)
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            rate_per_hour: default_rate_per_hour(),
            zero_duration: ZeroDurationPolicy::default(),
        }
    }
}

fn default_rate_per_hour() -> u64 {
    DEFAULT_RATE_PER_HOUR
}
