mod quote_fee;
mod register_payment;

pub use quote_fee::QuoteFeeUseCase;
pub use register_payment::RegisterPaymentUseCase;
