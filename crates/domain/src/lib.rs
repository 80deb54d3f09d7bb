//! Parkway Domain Layer
pub mod billing;
pub mod cell;
pub mod config;
pub mod errors;
pub mod money;
pub mod payment;
pub mod plate;
pub mod time_of_day;
pub mod user;
pub mod validators;
pub mod vehicle;

pub use billing::{
    compute_fee, elapsed_minutes, resolve_duration_hours, BillingPolicy, FeeQuote,
    ZeroDurationPolicy,
};
pub use cell::{Cell, CellType};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use money::Money;
pub use payment::{PaymentReceipt, PaymentRequest, PaymentStatus, PaymentUpdate, ValidatedPayment};
pub use plate::Plate;
pub use time_of_day::TimeOfDay;
pub use user::User;
pub use vehicle::{NewVehicle, Vehicle};
