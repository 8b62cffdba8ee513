use std::io::Write;

use storefront_app::{config::AppConfig, views::checkout};

use crate::cli::write_error;

pub(crate) fn run(config: &AppConfig, out: impl Write) -> Result<(), String> {
    let rates = config
        .storage
        .rate_table()
        .map_err(|error| format!("failed to load shipping rates: {error}"))?;

    checkout::render_shipping_rates(out, &rates).map_err(|error| write_error(&error))
}
