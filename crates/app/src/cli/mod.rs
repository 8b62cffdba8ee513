use std::io;

use clap::{Parser, Subcommand};
use storefront_app::{config::AppConfig, context::AppContext};

mod cart;
mod catalogue;
mod checkout;
mod orders;
mod shipping;
mod wishlist;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalogue
    Products,
    /// List collections
    Collections,
    /// Show one product
    Product(catalogue::ProductArgs),
    /// Manage the cart
    Cart(cart::CartCommand),
    /// Fill in the checkout form and place the order
    Checkout(checkout::CheckoutArgs),
    /// Show the signed-in customer's orders
    Orders,
    /// Show or edit the wishlist
    Wishlist(wishlist::WishlistCommand),
    /// List shipping methods and their costs
    Shipping,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.config.api, &self.config.session)
            .map_err(|error| format!("failed to initialise: {error}"))?;

        let out = io::stdout().lock();

        match self.command {
            Commands::Products => catalogue::products(&context, out).await,
            Commands::Collections => catalogue::collections(&context, out).await,
            Commands::Product(args) => catalogue::product(&context, args, out).await,
            Commands::Cart(command) => cart::run(&context, &self.config, command, out).await,
            Commands::Checkout(args) => checkout::run(&context, &self.config, args, out).await,
            Commands::Orders => orders::run(&context, &self.config, out).await,
            Commands::Wishlist(command) => wishlist::run(&context, command, out).await,
            Commands::Shipping => shipping::run(&self.config, out),
        }
    }
}

pub(crate) fn write_error(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}
