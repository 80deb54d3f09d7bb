use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::time_of_day::{TimeOfDay, MINUTES_PER_DAY, MINUTES_PER_HOUR};

pub const DEFAULT_RATE_PER_HOUR: u64 = 4000;

/// What to bill when entry and exit are the same minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDurationPolicy {
    /// Any registered stay is charged at least one hour.
    #[default]
    BillMinimumHour,
    /// A zero-length stay is free.
    BillNothing,
}

/// Elapsed minutes between entry and exit.
///
/// An exit earlier than the entry is taken as the next day, so the result is
/// always below 24 hours. Longer stays cannot be represented.
pub fn elapsed_minutes(entry: TimeOfDay, exit: TimeOfDay) -> u32 {
    let entry_minutes = entry.minutes_since_midnight();
    let mut exit_minutes = exit.minutes_since_midnight();

    if exit_minutes < entry_minutes {
        exit_minutes += MINUTES_PER_DAY;
    }

    exit_minutes - entry_minutes
}

/// Billable hours for a stay, rounding any started hour up.
pub fn resolve_duration_hours(
    entry: TimeOfDay,
    exit: TimeOfDay,
    zero_duration: ZeroDurationPolicy,
) -> u32 {
    let hours = elapsed_minutes(entry, exit).div_ceil(MINUTES_PER_HOUR);

    match zero_duration {
        ZeroDurationPolicy::BillMinimumHour => hours.max(1),
        ZeroDurationPolicy::BillNothing => hours,
    }
}

pub fn compute_fee(hours: u32, rate_per_hour: Money) -> Money {
    rate_per_hour.saturating_mul(u64::from(hours))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub elapsed_minutes: u32,
    pub billable_hours: u32,
    pub total: Money,
}

/// Rate and rounding rules applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPolicy {
    pub rate_per_hour: Money,
    pub zero_duration: ZeroDurationPolicy,
}

impl BillingPolicy {
    pub fn new(rate_per_hour: Money, zero_duration: ZeroDurationPolicy) -> Self {
        Self {
            rate_per_hour,
            zero_duration,
        }
    }

    pub fn quote(&self, entry: TimeOfDay, exit: TimeOfDay) -> FeeQuote {
        let billable_hours = resolve_duration_hours(entry, exit, self.zero_duration);

        FeeQuote {
            elapsed_minutes: elapsed_minutes(entry, exit),
            billable_hours,
            total: compute_fee(billable_hours, self.rate_per_hour),
        }
    }
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self::new(Money::new(DEFAULT_RATE_PER_HOUR), ZeroDurationPolicy::default())
    }
}
