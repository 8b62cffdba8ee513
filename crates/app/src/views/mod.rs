//! Plain-text views written to any [`std::io::Write`].

use std::ops::Range;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod wishlist;

/// Placeholder for detail fields an order does not have.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders `builder` with a bold header row and `right` columns right-aligned.
pub(crate) fn render_table(builder: Builder, right: Range<usize>) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(right), Alignment::right());

    table.to_string()
}
