//! Checkout views.

use std::io::{self, Write};

use rust_decimal::Decimal;
use storefront::{
    checkout::{CheckoutForm, ValidationErrors},
    payment::PaymentInstructions,
    pricing::format_amount,
    shipping::ShippingRateTable,
};
use tabled::builder::Builder;

use crate::views::render_table;

/// Writes the shipping methods and their costs.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_shipping_rates(mut out: impl Write, rates: &ShippingRateTable) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Shipping Method", "Cost"]);

    for rate in rates.rates() {
        builder.push_record([rate.method.clone(), format_amount(rate.cost)]);
    }

    writeln!(out, "{}", render_table(builder, 1..2))
}

/// Writes the amounts due: cart total, shipping cost and the total with shipping.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_totals(mut out: impl Write, form: &CheckoutForm, cart_total: Decimal) -> io::Result<()> {
    writeln!(out, "Total Amount: {}", format_amount(cart_total))?;

    if let Some(shipping) = form.shipping() {
        writeln!(out, "Shipping Method: {}", shipping.method())?;
    }

    writeln!(out, "Shipping Cost: {}", format_amount(form.shipping_cost()))?;
    writeln!(
        out,
        "Total with Shipping: {}",
        format_amount(form.total_with_shipping(cart_total))
    )
}

/// Writes how to pay before the payment confirmation is submitted.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_payment_instructions(
    mut out: impl Write,
    instructions: &PaymentInstructions,
    amount_due: Decimal,
) -> io::Result<()> {
    writeln!(out, "Payment Details")?;
    writeln!(
        out,
        "Pay {} to {} via M-PESA:",
        format_amount(amount_due),
        instructions.recipient_name
    )?;

    for (number, step) in instructions.steps().iter().enumerate() {
        writeln!(out, "  {}. {step}", number + 1)?;
    }

    Ok(())
}

/// Writes each invalid field with its message, in form order.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_errors(mut out: impl Write, errors: &ValidationErrors) -> io::Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "{}: {message}", field.label())?;
    }

    Ok(())
}
