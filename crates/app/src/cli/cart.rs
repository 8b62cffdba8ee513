use std::io::Write;

use clap::{Args, Subcommand};
use storefront::products::{ProductId, ProductSelection};
use storefront_app::{config::AppConfig, context::AppContext, views::cart};
use tracing::info;

use crate::cli::write_error;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart
    Show,
    /// Add a product to the cart
    Add(AddArgs),
    /// Add one unit of every line of a product
    Increase(ProductArg),
    /// Remove one unit of every line of a product, keeping at least one
    Decrease(ProductArg),
    /// Remove every line of a product
    Remove(ProductArg),
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    id: String,

    /// Colour; defaults to the product's first colour
    #[arg(long)]
    color: Option<String>,

    /// Size; defaults to the product's first size
    #[arg(long)]
    size: Option<String>,

    /// Number of units
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    quantity: u32,
}

#[derive(Debug, Args)]
struct ProductArg {
    /// Product id
    id: String,
}

pub(crate) async fn run(
    context: &AppContext,
    config: &AppConfig,
    command: CartCommand,
    out: impl Write,
) -> Result<(), String> {
    let mut store = config
        .storage
        .open_cart()
        .map_err(|error| format!("failed to open cart: {error}"))?;

    let result = match command.command {
        CartSubcommand::Show => Ok(()),
        CartSubcommand::Add(args) => {
            let id = ProductId::from(args.id);

            let product = context
                .products
                .get_product(&id)
                .await
                .map_err(|error| format!("failed to fetch product: {error}"))?
                .ok_or_else(|| format!("product {id} not found"))?;

            let mut selection = ProductSelection::new(&product);

            if let Some(color) = &args.color {
                selection
                    .choose_color(color)
                    .map_err(|error| error.to_string())?;
            }

            if let Some(size) = &args.size {
                selection
                    .choose_size(size)
                    .map_err(|error| error.to_string())?;
            }

            selection
                .set_quantity(args.quantity)
                .map_err(|error| error.to_string())?;

            let line = selection
                .into_line_item()
                .map_err(|error| error.to_string())?;

            info!(product = %id, quantity = line.quantity, "adding to cart");

            store.add_item(line)
        }
        CartSubcommand::Increase(args) => store.increase_quantity(&ProductId::from(args.id)),
        CartSubcommand::Decrease(args) => store.decrease_quantity(&ProductId::from(args.id)),
        CartSubcommand::Remove(args) => store.remove_item(&ProductId::from(args.id)),
        CartSubcommand::Clear => store.clear(),
    };

    result.map_err(|error| format!("failed to update cart: {error}"))?;

    cart::render(out, store.items()).map_err(|error| write_error(&error))
}
