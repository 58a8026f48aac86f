//! Output formatting helpers for human-readable and JSON output.

use kisan::{CartItem, CartSummary, FavoriteItem};
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Print `value` as a single JSON line.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Lay out a table with aligned columns.
///
/// `headers` and each row in `rows` must have the same length. Returns no
/// lines for an empty table.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    // Column widths: max of header and all row values
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter().take(col_count)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(headers.iter().copied(), &widths));
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Print a table with aligned columns in human-readable format.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(headers, rows) {
        println!("{line}");
    }
}

pub fn cart_rows(cart: &[CartItem]) -> Vec<Vec<String>> {
    cart.iter()
        .map(|line| {
            vec![
                line.id.to_string(),
                line.name.clone(),
                line.price.to_string(),
                line.quantity.to_string(),
                line.unit.clone(),
                line.farmer.clone(),
                line.line_total().to_string(),
            ]
        })
        .collect()
}

pub const CART_HEADERS: [&str; 7] = ["ID", "NAME", "PRICE", "QTY", "UNIT", "FARMER", "TOTAL"];

pub fn favorite_rows(favorites: &[FavoriteItem]) -> Vec<Vec<String>> {
    favorites
        .iter()
        .map(|fav| {
            vec![
                fav.id.to_string(),
                fav.name.clone(),
                fav.price.to_string(),
                fav.unit.clone(),
                fav.farmer.clone(),
                fav.location.clone(),
            ]
        })
        .collect()
}

pub const FAVORITE_HEADERS: [&str; 6] = ["ID", "NAME", "PRICE", "UNIT", "FARMER", "LOCATION"];

pub fn print_summary(summary: &CartSummary) {
    println!("Items:        {}", summary.item_count);
    println!("Subtotal:     {}", summary.subtotal);
    println!("Delivery fee: {}", summary.delivery_fee);
    println!("Total:        {}", summary.total);
}
