//! Checkout form state machine

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::CartLineItem,
    checkout::{
        fields::{BillingDetails, CheckoutField, PaymentConfirmation},
        outcome::SubmissionOutcome,
        payload::OrderPayload,
        validation::{SHIPPING_METHOD_REQUIRED, ValidationErrors, check_text_field},
    },
    identity::{CustomerIdentity, Session},
    shipping::{ShippingError, ShippingRateTable, ShippingSelection},
};

/// Errors returned by checkout form transitions.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout needs a signed-in customer.
    #[error("sign in to check out")]
    AuthenticationRequired,

    /// The form is not collecting details (not started, or already finished).
    #[error("checkout is not accepting details")]
    NotCollecting,

    /// An order submission is already in flight for this form.
    #[error("an order is already being submitted")]
    SubmissionInFlight,

    /// There is nothing in the cart to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// One or more fields are invalid.
    #[error("invalid checkout details: {0}")]
    Invalid(ValidationErrors),

    /// The shipping method could not be selected.
    #[error(transparent)]
    Shipping(#[from] ShippingError),
}

impl CheckoutError {
    /// Where the customer should be sent because of this error, if anywhere.
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            CheckoutError::AuthenticationRequired => Some(Navigation::SignIn),
            _ => None,
        }
    }
}

/// Where the shopper goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The sign-in page.
    SignIn,

    /// An external page, usually a payment provider.
    External(String),

    /// The order confirmation page.
    OrderConfirmation,
}

/// Checkout form lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Checkout not started.
    Idle,

    /// The customer is filling in the form.
    CollectingDetails,

    /// An order submission is in flight.
    Submitting,

    /// The order was accepted and the shopper is sent to `url` (terminal).
    Redirecting {
        /// Destination URL
        url: String,
    },

    /// The order was accepted (terminal).
    Completed,
}

/// Identifies one submission attempt of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// A submission the caller must send and then report back with [`CheckoutForm::resolve`].
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    /// Ticket to hand back with the result
    pub ticket: SubmissionTicket,

    /// Order to send
    pub payload: OrderPayload,
}

/// What [`CheckoutForm::resolve`] did with a submission result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The order went through; navigate.
    Navigate(Navigation),

    /// The submission failed; the form is editable again with its fields intact.
    Retry {
        /// Message shown to the customer
        error: String,
    },

    /// The result belongs to a submission this form is no longer waiting for and was ignored.
    Stale,
}

/// Checkout form state: billing, shipping and payment confirmation groups plus submission state.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    rates: ShippingRateTable,
    phase: CheckoutPhase,
    customer: Option<CustomerIdentity>,
    billing: BillingDetails,
    shipping: Option<ShippingSelection>,
    payment: PaymentConfirmation,
    errors: ValidationErrors,
    attempted: bool,
    submission_error: Option<String>,
    issued: u64,
    in_flight: Option<SubmissionTicket>,
}

impl CheckoutForm {
    /// Creates an idle form that prices shipping from `rates`.
    pub fn new(rates: ShippingRateTable) -> Self {
        Self {
            rates,
            phase: CheckoutPhase::Idle,
            customer: None,
            billing: BillingDetails::default(),
            shipping: None,
            payment: PaymentConfirmation::default(),
            errors: ValidationErrors::default(),
            attempted: false,
            submission_error: None,
            issued: 0,
            in_flight: None,
        }
    }

    /// Starts collecting details for the signed-in customer.
    ///
    /// Calling this again while collecting is a no-op.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AuthenticationRequired`]: nobody is signed in; the form stays idle.
    /// - [`CheckoutError::NotCollecting`]: the form is submitting or finished.
    pub fn begin(&mut self, session: &Session) -> Result<(), CheckoutError> {
        match self.phase {
            CheckoutPhase::Idle => {}
            CheckoutPhase::CollectingDetails => return Ok(()),
            CheckoutPhase::Submitting
            | CheckoutPhase::Redirecting { .. }
            | CheckoutPhase::Completed => return Err(CheckoutError::NotCollecting),
        }

        let customer = session
            .customer()
            .ok_or(CheckoutError::AuthenticationRequired)?;

        self.customer = Some(customer.clone());
        self.phase = CheckoutPhase::CollectingDetails;

        Ok(())
    }

    /// Sets a field's value.
    ///
    /// Once a submission has been attempted the changed field is re-validated on its own; other
    /// fields keep their current error state. Setting [`CheckoutField::ShippingMethod`] selects
    /// the shipping method.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::NotCollecting`]: the form is not collecting details.
    /// - [`CheckoutError::Shipping`]: the shipping method is not in the rate table.
    pub fn set_field(
        &mut self,
        field: CheckoutField,
        value: impl Into<String>,
    ) -> Result<(), CheckoutError> {
        self.ensure_collecting()?;

        let value = value.into();

        match field {
            CheckoutField::ShippingMethod => return self.select_shipping_method(&value),
            CheckoutField::FirstName => self.billing.first_name = value,
            CheckoutField::LastName => self.billing.last_name = value,
            CheckoutField::CompanyName => self.billing.company_name = non_blank(value),
            CheckoutField::TownCity => self.billing.town_city = value,
            CheckoutField::PhoneNumber => self.billing.phone_number = value,
            CheckoutField::OrderNotes => self.billing.order_notes = non_blank(value),
            CheckoutField::PayerName => self.payment.payer_name = value,
            CheckoutField::PayerMobileNumber => self.payment.payer_mobile_number = value,
            CheckoutField::TransactionCode => self.payment.transaction_code = value,
        }

        if self.attempted {
            let result = self.check(field);
            self.errors.apply(field, result);
        }

        Ok(())
    }

    /// Selects a shipping method; its cost is taken from the rate table immediately.
    ///
    /// Validation messages are left as they are. An unknown method clears the selection.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::NotCollecting`]: the form is not collecting details.
    /// - [`CheckoutError::Shipping`]: the method is blank or not in the rate table.
    pub fn select_shipping_method(&mut self, method: &str) -> Result<(), CheckoutError> {
        self.ensure_collecting()?;

        match self.rates.select(method) {
            Ok(selection) => {
                self.shipping = Some(selection);

                Ok(())
            }
            Err(error) => {
                self.shipping = None;

                Err(error.into())
            }
        }
    }

    /// Current value of a field.
    pub fn value(&self, field: CheckoutField) -> Option<&str> {
        let value = match field {
            CheckoutField::FirstName => &self.billing.first_name,
            CheckoutField::LastName => &self.billing.last_name,
            CheckoutField::CompanyName => return self.billing.company_name.as_deref(),
            CheckoutField::TownCity => &self.billing.town_city,
            CheckoutField::PhoneNumber => &self.billing.phone_number,
            CheckoutField::OrderNotes => return self.billing.order_notes.as_deref(),
            CheckoutField::ShippingMethod => {
                return self.shipping.as_ref().map(ShippingSelection::method);
            }
            CheckoutField::PayerName => &self.payment.payer_name,
            CheckoutField::PayerMobileNumber => &self.payment.payer_mobile_number,
            CheckoutField::TransactionCode => &self.payment.transaction_code,
        };

        Some(value.as_str())
    }

    /// Checks every field, replacing the current validation messages.
    ///
    /// Returns `true` if the form is valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = ValidationErrors::default();

        for field in CheckoutField::ALL {
            errors.apply(field, self.check(field));
        }

        self.errors = errors;

        self.errors.is_empty()
    }

    /// Sends the form: validates it and moves to [`CheckoutPhase::Submitting`].
    ///
    /// While a submission is in flight every further call fails, so at most one order is
    /// submitted per form until [`CheckoutForm::resolve`] is called.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::SubmissionInFlight`]: a submission is already in flight.
    /// - [`CheckoutError::NotCollecting`]: the form was not started or has finished.
    /// - [`CheckoutError::Invalid`]: one or more fields are invalid.
    /// - [`CheckoutError::EmptyCart`]: `cart` has no lines.
    pub fn submit(&mut self, cart: &[CartLineItem]) -> Result<PendingSubmission, CheckoutError> {
        match self.phase {
            CheckoutPhase::CollectingDetails => {}
            CheckoutPhase::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutPhase::Idle | CheckoutPhase::Redirecting { .. } | CheckoutPhase::Completed => {
                return Err(CheckoutError::NotCollecting);
            }
        }

        let customer = self
            .customer
            .clone()
            .ok_or(CheckoutError::AuthenticationRequired)?;

        self.attempted = true;

        let valid = self.validate();

        let (true, Some(shipping)) = (valid, self.shipping.as_ref()) else {
            return Err(CheckoutError::Invalid(self.errors.clone()));
        };

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let payload = OrderPayload::new(
            customer,
            cart,
            self.billing.clone(),
            shipping,
            self.payment.clone(),
        );

        self.issued += 1;

        let ticket = SubmissionTicket(self.issued);

        self.in_flight = Some(ticket);
        self.submission_error = None;
        self.phase = CheckoutPhase::Submitting;

        Ok(PendingSubmission { ticket, payload })
    }

    /// Applies the result of the submission identified by `ticket`.
    ///
    /// Results for any other ticket, or arriving when nothing is in flight, are ignored.
    pub fn resolve<E: ToString>(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<SubmissionOutcome, E>,
    ) -> Resolution {
        if self.phase != CheckoutPhase::Submitting || self.in_flight != Some(ticket) {
            return Resolution::Stale;
        }

        self.in_flight = None;

        match result {
            Ok(SubmissionOutcome::Redirect(url)) => {
                self.phase = CheckoutPhase::Redirecting { url: url.clone() };

                Resolution::Navigate(Navigation::External(url))
            }
            Ok(SubmissionOutcome::Confirmed(_)) => {
                self.phase = CheckoutPhase::Completed;

                Resolution::Navigate(Navigation::OrderConfirmation)
            }
            Err(error) => {
                let error = error.to_string();

                self.phase = CheckoutPhase::CollectingDetails;
                self.submission_error = Some(error.clone());

                Resolution::Retry { error }
            }
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &CheckoutPhase {
        &self.phase
    }

    /// Whether the submit control should be disabled.
    pub fn submission_in_flight(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }

    /// Field-scoped validation messages.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message from the last failed submission, cleared on the next attempt.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Selected shipping method.
    pub fn shipping(&self) -> Option<&ShippingSelection> {
        self.shipping.as_ref()
    }

    /// Cost of the selected shipping method, zero when none is selected.
    pub fn shipping_cost(&self) -> Decimal {
        self.shipping
            .as_ref()
            .map_or(Decimal::ZERO, ShippingSelection::cost)
    }

    /// Amount due: the cart total plus the selected shipping cost.
    pub fn total_with_shipping(&self, cart_total: Decimal) -> Decimal {
        cart_total + self.shipping_cost()
    }

    /// Rate table used for shipping lookups.
    pub fn rates(&self) -> &ShippingRateTable {
        &self.rates
    }

    fn ensure_collecting(&self) -> Result<(), CheckoutError> {
        match self.phase {
            CheckoutPhase::CollectingDetails => Ok(()),
            CheckoutPhase::Submitting => Err(CheckoutError::SubmissionInFlight),
            CheckoutPhase::Idle | CheckoutPhase::Redirecting { .. } | CheckoutPhase::Completed => {
                Err(CheckoutError::NotCollecting)
            }
        }
    }

    fn check(&self, field: CheckoutField) -> Result<(), &'static str> {
        match field {
            CheckoutField::ShippingMethod => match &self.shipping {
                Some(selection) if self.rates.cost(selection.method()).is_some() => Ok(()),
                _ => Err(SHIPPING_METHOD_REQUIRED),
            },
            _ => check_text_field(field, self.value(field).unwrap_or_default()),
        }
    }
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self::new(ShippingRateTable::default())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::products::{ProductId, ProductSnapshot};

    use super::*;

    fn session() -> Session {
        Session::Authenticated(CustomerIdentity {
            id: "user_1".to_string(),
            email: "otieno@example.com".to_string(),
            name: "Otieno Odhiambo".to_string(),
        })
    }

    fn cart() -> Vec<CartLineItem> {
        vec![CartLineItem::new(
            ProductSnapshot {
                id: ProductId::from("p1"),
                title: "Relay module".to_string(),
                price: Decimal::new(45_000, 2),
                media: Vec::new(),
                colors: Vec::new(),
                sizes: Vec::new(),
            },
            2,
            None,
            None,
        )]
    }

    fn filled_form() -> Result<CheckoutForm, CheckoutError> {
        let mut form = CheckoutForm::default();

        form.begin(&session())?;
        form.set_field(CheckoutField::FirstName, "Otieno")?;
        form.set_field(CheckoutField::LastName, "Odhiambo")?;
        form.set_field(CheckoutField::TownCity, "Kisumu")?;
        form.set_field(CheckoutField::PhoneNumber, "0722000000")?;
        form.select_shipping_method("Ena Coach Western Kenya")?;
        form.set_field(CheckoutField::PayerName, "OTIENO ODHIAMBO")?;
        form.set_field(CheckoutField::PayerMobileNumber, "0722000000")?;
        form.set_field(CheckoutField::TransactionCode, "SBK12ABC3")?;

        Ok(form)
    }

    #[test]
    fn begin_requires_a_customer() {
        let mut form = CheckoutForm::default();

        let result = form.begin(&Session::Anonymous);

        assert!(matches!(result, Err(CheckoutError::AuthenticationRequired)));
        assert_eq!(
            result.err().and_then(|e| e.navigation()),
            Some(Navigation::SignIn)
        );
        assert_eq!(form.phase(), &CheckoutPhase::Idle);
    }

    #[test]
    fn begin_moves_to_collecting() -> TestResult {
        let mut form = CheckoutForm::default();

        form.begin(&session())?;
        form.begin(&session())?;

        assert_eq!(form.phase(), &CheckoutPhase::CollectingDetails);

        Ok(())
    }

    #[test]
    fn fields_cannot_be_set_before_begin() {
        let mut form = CheckoutForm::default();

        assert!(matches!(
            form.set_field(CheckoutField::FirstName, "Amina"),
            Err(CheckoutError::NotCollecting)
        ));
    }

    #[test]
    fn shipping_selection_derives_cost() -> TestResult {
        let mut form = CheckoutForm::default();
        form.begin(&session())?;

        form.select_shipping_method("Pick up from shop")?;
        assert_eq!(form.shipping_cost(), Decimal::ZERO);

        form.select_shipping_method("Wells Fargo Nairobi")?;
        assert_eq!(form.shipping_cost(), Decimal::from(320));
        assert_eq!(
            form.total_with_shipping(Decimal::new(74_001, 2)),
            Decimal::new(106_001, 2)
        );
        assert!(form.errors().is_empty());

        Ok(())
    }

    #[test]
    fn unknown_shipping_method_clears_selection() -> TestResult {
        let mut form = CheckoutForm::default();
        form.begin(&session())?;
        form.select_shipping_method("Super Metro Juja")?;

        let result = form.set_field(CheckoutField::ShippingMethod, "Hot air balloon");

        assert!(matches!(
            result,
            Err(CheckoutError::Shipping(ShippingError::UnknownMethod(_)))
        ));
        assert_eq!(form.shipping(), None);
        assert_eq!(form.shipping_cost(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn submit_reports_every_invalid_field() -> TestResult {
        let mut form = CheckoutForm::default();
        form.begin(&session())?;
        form.set_field(CheckoutField::FirstName, "O")?;

        let Err(CheckoutError::Invalid(errors)) = form.submit(&cart()) else {
            panic!("expected validation errors");
        };

        assert_eq!(errors.get(CheckoutField::FirstName), Some("First name is required"));
        assert_eq!(
            errors.get(CheckoutField::ShippingMethod),
            Some("Please select a shipping method")
        );
        assert_eq!(errors.get(CheckoutField::CompanyName), None);
        assert_eq!(errors.len(), 8);
        assert_eq!(form.phase(), &CheckoutPhase::CollectingDetails);

        Ok(())
    }

    #[test]
    fn editing_after_submit_revalidates_only_that_field() -> TestResult {
        let mut form = CheckoutForm::default();
        form.begin(&session())?;

        let _invalid = form.submit(&cart());
        form.set_field(CheckoutField::FirstName, "Otieno")?;

        assert_eq!(form.errors().get(CheckoutField::FirstName), None);
        assert!(form.errors().get(CheckoutField::LastName).is_some());

        form.set_field(CheckoutField::FirstName, "O")?;

        assert!(form.errors().get(CheckoutField::FirstName).is_some());

        Ok(())
    }

    #[test]
    fn editing_before_submit_does_not_flag_fields() -> TestResult {
        let mut form = CheckoutForm::default();
        form.begin(&session())?;

        form.set_field(CheckoutField::FirstName, "O")?;

        assert!(form.errors().is_empty());

        Ok(())
    }

    #[test]
    fn submit_with_empty_cart_fails() -> TestResult {
        let mut form = filled_form()?;

        assert!(matches!(form.submit(&[]), Err(CheckoutError::EmptyCart)));
        assert_eq!(form.phase(), &CheckoutPhase::CollectingDetails);

        Ok(())
    }

    #[test]
    fn submit_builds_payload_and_blocks_duplicates() -> TestResult {
        let mut form = filled_form()?;

        let pending = form.submit(&cart())?;

        assert_eq!(pending.payload.total_amount(), Decimal::from(1_200));
        assert!(form.submission_in_flight());
        assert!(matches!(
            form.submit(&cart()),
            Err(CheckoutError::SubmissionInFlight)
        ));
        assert!(matches!(
            form.set_field(CheckoutField::FirstName, "Other"),
            Err(CheckoutError::SubmissionInFlight)
        ));

        Ok(())
    }

    #[test]
    fn redirect_outcome_navigates_externally() -> TestResult {
        let mut form = filled_form()?;
        let pending = form.submit(&cart())?;

        let resolution = form.resolve::<String>(
            pending.ticket,
            Ok(SubmissionOutcome::Redirect("https://pay.example/x".to_string())),
        );

        assert_eq!(
            resolution,
            Resolution::Navigate(Navigation::External("https://pay.example/x".to_string()))
        );
        assert_eq!(
            form.phase(),
            &CheckoutPhase::Redirecting {
                url: "https://pay.example/x".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn confirmation_outcome_completes() -> TestResult {
        let mut form = filled_form()?;
        let pending = form.submit(&cart())?;

        let resolution = form.resolve::<String>(
            pending.ticket,
            Ok(SubmissionOutcome::Confirmed(json!({ "ok": true }))),
        );

        assert_eq!(resolution, Resolution::Navigate(Navigation::OrderConfirmation));
        assert_eq!(form.phase(), &CheckoutPhase::Completed);
        assert!(matches!(
            form.submit(&cart()),
            Err(CheckoutError::NotCollecting)
        ));

        Ok(())
    }

    #[test]
    fn failure_returns_to_collecting_with_fields_kept() -> TestResult {
        let mut form = filled_form()?;
        let pending = form.submit(&cart())?;

        let resolution = form.resolve(pending.ticket, Err("connection reset"));

        assert_eq!(
            resolution,
            Resolution::Retry {
                error: "connection reset".to_string()
            }
        );
        assert_eq!(form.phase(), &CheckoutPhase::CollectingDetails);
        assert_eq!(form.submission_error(), Some("connection reset"));
        assert_eq!(form.value(CheckoutField::FirstName), Some("Otieno"));
        assert_eq!(form.shipping_cost(), Decimal::from(300));

        let retry = form.submit(&cart())?;

        assert_ne!(retry.ticket, pending.ticket);
        assert_eq!(form.submission_error(), None);

        Ok(())
    }

    #[test]
    fn stale_results_are_ignored() -> TestResult {
        let mut form = filled_form()?;
        let first = form.submit(&cart())?;

        let _retry = form.resolve(first.ticket, Err("timeout"));
        let second = form.submit(&cart())?;

        let resolution = form.resolve::<String>(
            first.ticket,
            Ok(SubmissionOutcome::Redirect("https://pay.example/old".to_string())),
        );

        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(form.phase(), &CheckoutPhase::Submitting);

        let resolution = form.resolve::<String>(
            second.ticket,
            Ok(SubmissionOutcome::Confirmed(json!({}))),
        );

        assert_eq!(resolution, Resolution::Navigate(Navigation::OrderConfirmation));

        Ok(())
    }

    #[test]
    fn optional_fields_store_blank_as_none() -> TestResult {
        let mut form = filled_form()?;

        form.set_field(CheckoutField::CompanyName, "  ")?;
        form.set_field(CheckoutField::OrderNotes, "Leave at the gate")?;

        assert_eq!(form.value(CheckoutField::CompanyName), None);
        assert_eq!(form.value(CheckoutField::OrderNotes), Some("Leave at the gate"));

        Ok(())
    }
}
