use parkway_domain::{FeeQuote, PaymentReceipt, PaymentRequest};
use serde::{Deserialize, Serialize};

/// Request DTO for registering a payment.
///
/// Missing fields deserialize as empty strings so that they are reported by
/// payment validation instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterPaymentRequest {
    pub plate: String,
    pub payment: String,
    pub entry_time: String,
    pub exit_time: String,
    pub cell: Option<String>,
}

impl From<RegisterPaymentRequest> for PaymentRequest {
    fn from(req: RegisterPaymentRequest) -> Self {
        Self {
            plate: req.plate,
            status: req.payment,
            entry_time: req.entry_time,
            exit_time: req.exit_time,
            cell: req.cell,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub plate: String,
    pub payment: String,
    pub entry_time: String,
    pub exit_time: String,
    pub billable_hours: u32,
    pub total_payment: u64,
    pub total_payment_display: String,
}

impl From<PaymentReceipt> for PaymentResponse {
    fn from(receipt: PaymentReceipt) -> Self {
        Self {
            plate: receipt.plate.to_string(),
            payment: receipt.status.to_string(),
            entry_time: receipt.entry_time.to_string(),
            exit_time: receipt.exit_time.to_string(),
            billable_hours: receipt.billable_hours,
            total_payment: receipt.total_fee.amount(),
            total_payment_display: receipt.total_fee.to_display_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub entry_time: String,
    pub exit_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub elapsed_minutes: u32,
    pub billable_hours: u32,
    pub total: u64,
    pub total_display: String,
}

impl From<FeeQuote> for QuoteResponse {
    fn from(quote: FeeQuote) -> Self {
        Self {
            elapsed_minutes: quote.elapsed_minutes,
            billable_hours: quote.billable_hours,
            total: quote.total.amount(),
            total_display: quote.total.to_display_string(),
        }
    }
}
