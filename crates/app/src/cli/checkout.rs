use std::io::Write;

use clap::Args;
use storefront::{
    checkout::{CheckoutError, CheckoutField, CheckoutForm, Navigation},
    payment::PaymentInstructions,
};
use storefront_app::{
    config::AppConfig,
    context::AppContext,
    domain::checkout::{PlaceOrderError, place_order},
    views::{cart, checkout},
};

use crate::cli::write_error;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Billing first name
    #[arg(long)]
    first_name: Option<String>,

    /// Billing last name
    #[arg(long)]
    last_name: Option<String>,

    /// Company name
    #[arg(long)]
    company_name: Option<String>,

    /// Town or city
    #[arg(long)]
    town_city: Option<String>,

    /// Phone number
    #[arg(long)]
    phone_number: Option<String>,

    /// Order notes
    #[arg(long)]
    order_notes: Option<String>,

    /// Shipping method, see `storefront shipping`
    #[arg(long)]
    shipping_method: Option<String>,

    /// Name on the M-PESA account that paid
    #[arg(long)]
    payer_name: Option<String>,

    /// Mobile number that paid
    #[arg(long)]
    payer_mobile_number: Option<String>,

    /// M-PESA transaction code
    #[arg(long)]
    transaction_code: Option<String>,
}

impl CheckoutArgs {
    fn values(self) -> Vec<(CheckoutField, String)> {
        [
            (CheckoutField::FirstName, self.first_name),
            (CheckoutField::LastName, self.last_name),
            (CheckoutField::CompanyName, self.company_name),
            (CheckoutField::TownCity, self.town_city),
            (CheckoutField::PhoneNumber, self.phone_number),
            (CheckoutField::OrderNotes, self.order_notes),
            (CheckoutField::ShippingMethod, self.shipping_method),
            (CheckoutField::PayerName, self.payer_name),
            (CheckoutField::PayerMobileNumber, self.payer_mobile_number),
            (CheckoutField::TransactionCode, self.transaction_code),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

pub(crate) async fn run(
    context: &AppContext,
    config: &AppConfig,
    args: CheckoutArgs,
    mut out: impl Write,
) -> Result<(), String> {
    let rates = config
        .storage
        .rate_table()
        .map_err(|error| format!("failed to load shipping rates: {error}"))?;

    let mut form = CheckoutForm::new(rates);

    form.begin(&config.session.session())
        .map_err(|error| error.to_string())?;

    let mut store = config
        .storage
        .open_cart()
        .map_err(|error| format!("failed to open cart: {error}"))?;

    cart::render(&mut out, store.items()).map_err(|error| write_error(&error))?;

    if store.is_empty() {
        return Err("add something to the cart before checking out".to_string());
    }

    for (field, value) in args.values() {
        if let Err(error) = form.set_field(field, value) {
            writeln!(out, "{field}: {error}").map_err(|error| write_error(&error))?;
        }
    }

    writeln!(out).map_err(|error| write_error(&error))?;
    checkout::render_totals(&mut out, &form, store.total_amount())
        .map_err(|error| write_error(&error))?;
    writeln!(out).map_err(|error| write_error(&error))?;
    checkout::render_payment_instructions(
        &mut out,
        &PaymentInstructions::default(),
        form.total_with_shipping(store.total_amount()),
    )
    .map_err(|error| write_error(&error))?;
    writeln!(out).map_err(|error| write_error(&error))?;

    match place_order(&mut form, &mut store, context.checkout.as_ref()).await {
        Ok(Navigation::External(url)) => {
            writeln!(out, "Continue to payment: {url}").map_err(|error| write_error(&error))
        }
        Ok(Navigation::OrderConfirmation) => {
            writeln!(out, "Order placed. Your cart has been cleared.")
                .map_err(|error| write_error(&error))
        }
        Ok(Navigation::SignIn) => Err(CheckoutError::AuthenticationRequired.to_string()),
        Err(PlaceOrderError::Checkout(CheckoutError::Invalid(errors))) => {
            checkout::render_errors(&mut out, &errors).map_err(|error| write_error(&error))?;

            Err("checkout details are incomplete".to_string())
        }
        Err(error) => Err(error.to_string()),
    }
}
