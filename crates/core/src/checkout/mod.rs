//! Checkout

mod fields;
mod form;
mod outcome;
mod payload;
mod validation;

pub use fields::{BillingDetails, CheckoutField, PaymentConfirmation, UnknownField};
pub use form::{
    CheckoutError, CheckoutForm, CheckoutPhase, Navigation, PendingSubmission, Resolution,
    SubmissionTicket,
};
pub use outcome::SubmissionOutcome;
pub use payload::{OrderPayload, ShippingDetails};
pub use validation::{SHIPPING_METHOD_REQUIRED, ValidationErrors, check_text_field};
