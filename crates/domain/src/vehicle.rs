use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::DomainError;
use crate::money::Money;
use crate::payment::{PaymentStatus, PaymentUpdate};
use crate::plate::Plate;
use crate::time_of_day::TimeOfDay;
use crate::validators::validate_max_len;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: Plate,
    pub vehicle_type: Arc<str>,
    pub brand: Arc<str>,
    pub model: Arc<str>,
    pub color: Arc<str>,
    pub parking_spot: Arc<str>,
    pub status: Arc<str>,
    pub user: Arc<str>,
    pub novelty: Arc<str>,
    pub payment: Option<PaymentStatus>,
    pub entry_time: Option<TimeOfDay>,
    pub exit_time: Option<TimeOfDay>,
    pub total_payment: Option<Money>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Vehicle fields as captured by the registration form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewVehicle {
    pub plate: String,
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub parking_spot: String,
    pub status: String,
    pub user: String,
    pub novelty: String,
}

impl Vehicle {
    pub fn register(input: NewVehicle) -> Result<Self, DomainError> {
        let plate = Plate::parse(&input.plate)?;

        for (field, value) in [
            ("vehicle_type", &input.vehicle_type),
            ("brand", &input.brand),
            ("model", &input.model),
            ("color", &input.color),
            ("parking_spot", &input.parking_spot),
            ("status", &input.status),
            ("user", &input.user),
        ] {
            validate_max_len(field, value, 100)?;
        }
        validate_max_len("novelty", &input.novelty, 500)?;

        Ok(Self {
            plate,
            vehicle_type: trimmed(&input.vehicle_type),
            brand: trimmed(&input.brand),
            model: trimmed(&input.model),
            color: trimmed(&input.color),
            parking_spot: trimmed(&input.parking_spot),
            status: trimmed(&input.status),
            user: trimmed(&input.user),
            novelty: trimmed(&input.novelty),
            payment: None,
            entry_time: None,
            exit_time: None,
            total_payment: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Overwrites the billing fields of the last session. No history is kept.
    pub fn apply_payment(&mut self, update: PaymentUpdate) {
        self.payment = Some(update.status);
        self.entry_time = Some(update.entry_time);
        self.exit_time = Some(update.exit_time);
        self.total_payment = Some(update.total);

        if let Some(cell) = update.cell {
            self.parking_spot = cell;
        }
    }
}

fn trimmed(value: &str) -> Arc<str> {
    Arc::from(value.trim())
}
