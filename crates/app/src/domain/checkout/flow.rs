//! Order placement.

use storefront::{
    cart::{CartStorage, CartStore},
    checkout::{CheckoutForm, Navigation, Resolution},
};
use tracing::{error, info, warn};

use crate::domain::checkout::{errors::PlaceOrderError, service::CheckoutService};

/// Submits the form's order and applies the result.
///
/// The cart is cleared once the order is confirmed. A redirect leaves the cart as it is, since
/// payment has not completed yet. On failure the form is editable again and keeps its values.
///
/// # Errors
///
/// - [`PlaceOrderError::Checkout`]: the form refused to submit (invalid, empty cart, or already
///   submitting).
/// - [`PlaceOrderError::Submission`]: the checkout service failed.
pub async fn place_order<S: CartStorage>(
    form: &mut CheckoutForm,
    cart: &mut CartStore<S>,
    service: &dyn CheckoutService,
) -> Result<Navigation, PlaceOrderError> {
    let pending = form.submit(cart.items())?;

    info!(
        customer = %pending.payload.customer().id,
        lines = pending.payload.cart_items().len(),
        total = %pending.payload.total_amount(),
        "submitting order"
    );

    let result = service.submit(&pending.payload).await;

    if let Err(error) = &result {
        error!(%error, "order submission failed");
    }

    match form.resolve(pending.ticket, result) {
        Resolution::Navigate(Navigation::OrderConfirmation) => {
            info!("order confirmed");

            if let Err(error) = cart.clear() {
                warn!(%error, "order confirmed but the cart could not be cleared");
            }

            Ok(Navigation::OrderConfirmation)
        }
        Resolution::Navigate(navigation) => Ok(navigation),
        Resolution::Retry { error } => Err(PlaceOrderError::Submission(error)),
        Resolution::Stale => Err(PlaceOrderError::Superseded),
    }
}
