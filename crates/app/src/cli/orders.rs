use std::io::Write;

use storefront_app::{config::AppConfig, context::AppContext, views::orders};

use crate::cli::write_error;

pub(crate) async fn run(
    context: &AppContext,
    config: &AppConfig,
    out: impl Write,
) -> Result<(), String> {
    let session = config.session.session();

    let customer = session
        .customer()
        .ok_or_else(|| "sign in to see your orders".to_string())?;

    let list = orders::load(context.orders.as_ref(), customer)
        .await
        .map_err(|error| format!("failed to load orders: {error}"))?;

    orders::render(out, &list).map_err(|error| write_error(&error))
}
