//! Cart commands - list, add, remove, set-quantity, clear, summary.

use kisan::{CartItem, CartSummary, Store};

use super::ensure_saved;
use crate::cli::{CartAddArgs, CartCommand};
use crate::output::{self, CART_HEADERS, OutputFormat};

/// Run a cart command
pub fn run(
    store: &Store,
    command: CartCommand,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        CartCommand::List => {
            list(store, format)?;
        }
        CartCommand::Add(args) => {
            let item = cart_item(args);
            item.validate()?;
            let id = item.id;
            store.add_to_cart(item);
            ensure_saved(store)?;
            tracing::info!(id = id.get(), "Added to cart");
            list(store, format)?;
        }
        CartCommand::Remove { id } => {
            store.remove_from_cart(id);
            ensure_saved(store)?;
            list(store, format)?;
        }
        CartCommand::SetQuantity { id, quantity } => {
            if store.snapshot().cart_item(id).is_none() {
                tracing::warn!(id = id.get(), "Product is not in the cart");
            }
            store.update_cart_item_quantity(id, quantity);
            ensure_saved(store)?;
            list(store, format)?;
        }
        CartCommand::Clear => {
            store.clear_cart();
            ensure_saved(store)?;
            list(store, format)?;
        }
        CartCommand::Summary { delivery_fee } => {
            let summary = CartSummary::of(&store.cart(), delivery_fee);
            match format {
                OutputFormat::Human => output::print_summary(&summary),
                OutputFormat::Json => output::print_json(&summary)?,
            }
        }
    }
    Ok(())
}

fn cart_item(args: CartAddArgs) -> CartItem {
    CartItem::new(args.id, args.name, args.price, args.quantity)
        .with_unit(args.unit)
        .with_farmer(args.farmer)
        .with_image(args.image)
}

fn list(store: &Store, format: OutputFormat) -> Result<(), serde_json::Error> {
    let cart = store.cart();
    match format {
        OutputFormat::Human if cart.is_empty() => println!("Cart is empty"),
        OutputFormat::Human => output::print_table(&CART_HEADERS, &output::cart_rows(&cart)),
        OutputFormat::Json => output::print_json(&*cart)?,
    }
    Ok(())
}
