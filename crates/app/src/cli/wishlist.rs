use std::io::Write;

use clap::{Args, Subcommand};
use storefront::products::ProductId;
use storefront_app::{context::AppContext, views::wishlist};

use crate::cli::write_error;

#[derive(Debug, Args)]
pub(crate) struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Debug, Subcommand)]
enum WishlistSubcommand {
    /// Show saved products
    Show,
    /// Save a product, or remove it if already saved
    Toggle(ToggleArgs),
}

#[derive(Debug, Args)]
struct ToggleArgs {
    /// Product id
    id: String,
}

pub(crate) async fn run(
    context: &AppContext,
    command: WishlistCommand,
    mut out: impl Write,
) -> Result<(), String> {
    match command.command {
        WishlistSubcommand::Show => {
            let entries = wishlist::load(context.users.as_ref(), context.products.as_ref())
                .await
                .map_err(|error| format!("failed to load wishlist: {error}"))?;

            wishlist::render(out, &entries).map_err(|error| write_error(&error))
        }
        WishlistSubcommand::Toggle(args) => {
            let id = ProductId::from(args.id);

            let user = context
                .users
                .toggle_wishlist(&id)
                .await
                .map_err(|error| format!("failed to update wishlist: {error}"))?;

            let verb = if user.has_saved(&id) { "Saved" } else { "Removed" };

            writeln!(out, "{verb} {id}").map_err(|error| write_error(&error))
        }
    }
}
