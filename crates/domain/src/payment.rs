use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::billing::FeeQuote;
use crate::errors::DomainError;
use crate::money::Money;
use crate::plate::Plate;
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pagado,
    Pendiente,
    Vencido,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Pagado, Self::Pendiente, Self::Vencido];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pagado => "Pagado",
            Self::Pendiente => "Pendiente",
            Self::Vencido => "Vencido",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == trimmed)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "Unknown payment status '{trimmed}' (expected Pagado, Pendiente or Vencido)"
                ))
            })
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment registration exactly as submitted at the exit desk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentRequest {
    pub plate: String,
    pub status: String,
    pub entry_time: String,
    pub exit_time: String,
    #[serde(default)]
    pub cell: Option<String>,
}

/// A payment request whose fields are all present and well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub plate: Plate,
    pub status: PaymentStatus,
    pub entry_time: TimeOfDay,
    pub exit_time: TimeOfDay,
    pub cell: Option<Arc<str>>,
}

impl PaymentRequest {
    /// Checks required fields before anything is computed or written.
    ///
    /// Every empty field is reported at once; well-formedness is only checked
    /// once nothing is missing.
    pub fn validate(&self) -> Result<ValidatedPayment, DomainError> {
        let missing: Vec<&str> = [
            ("plate", &self.plate),
            ("entry_time", &self.entry_time),
            ("exit_time", &self.exit_time),
            ("status", &self.status),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let cell = self
            .cell
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Arc::from);

        Ok(ValidatedPayment {
            plate: Plate::parse(&self.plate)?,
            status: self.status.parse()?,
            entry_time: self.entry_time.parse()?,
            exit_time: self.exit_time.parse()?,
            cell,
        })
    }
}

/// Billing fields written onto a vehicle in a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentUpdate {
    pub status: PaymentStatus,
    pub entry_time: TimeOfDay,
    pub exit_time: TimeOfDay,
    pub total: Money,
    pub cell: Option<Arc<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub plate: Plate,
    pub status: PaymentStatus,
    pub entry_time: TimeOfDay,
    pub exit_time: TimeOfDay,
    pub billable_hours: u32,
    pub total_fee: Money,
}

impl PaymentReceipt {
    pub fn new(payment: &ValidatedPayment, quote: &FeeQuote) -> Self {
        Self {
            plate: payment.plate.clone(),
            status: payment.status,
            entry_time: payment.entry_time,
            exit_time: payment.exit_time,
            billable_hours: quote.billable_hours,
            total_fee: quote.total,
        }
    }
}
