//! Favorite commands.

use kisan::{FavoriteItem, Store};

use super::ensure_saved;
use crate::cli::{FavoriteArgs, FavoritesCommand};
use crate::output::{self, FAVORITE_HEADERS, OutputFormat};

/// Run a favorites command
pub fn run(
    store: &Store,
    command: FavoritesCommand,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        FavoritesCommand::List => list(store, format)?,
        FavoritesCommand::Add(args) => {
            let item = favorite_item(args);
            item.validate()?;
            store.add_to_favorites(item);
            ensure_saved(store)?;
            list(store, format)?;
        }
        FavoritesCommand::Remove { id } => {
            store.remove_from_favorites(id);
            ensure_saved(store)?;
            list(store, format)?;
        }
        FavoritesCommand::Check { id } => {
            let favorite = store.is_favorite(id);
            match format {
                OutputFormat::Human => println!("{}", if favorite { "yes" } else { "no" }),
                OutputFormat::Json => output::print_json(&serde_json::json!({
                    "id": id,
                    "favorite": favorite,
                }))?,
            }
        }
        FavoritesCommand::Toggle(args) => {
            let item = favorite_item(args);
            item.validate()?;
            let id = item.id;
            let favorite = store.toggle_favorite(item);
            ensure_saved(store)?;
            match format {
                OutputFormat::Human if favorite => println!("Product {id} added to favorites"),
                OutputFormat::Human => println!("Product {id} removed from favorites"),
                OutputFormat::Json => output::print_json(&serde_json::json!({
                    "id": id,
                    "favorite": favorite,
                }))?,
            }
        }
        FavoritesCommand::MoveToCart { id, quantity } => {
            let snapshot = store.snapshot();
            let Some(favorite) = snapshot.favorites.iter().find(|fav| fav.id == id) else {
                return Err(format!("product {id} is not a favorite").into());
            };
            store.add_to_cart(favorite.to_cart_item(quantity));
            ensure_saved(store)?;
            tracing::info!(id = id.get(), quantity = quantity.get(), "Moved favorite to cart");
            match format {
                OutputFormat::Human => println!("Added {quantity} × {} to cart", favorite.name),
                OutputFormat::Json => output::print_json(&*store.cart())?,
            }
        }
    }
    Ok(())
}

fn favorite_item(args: FavoriteArgs) -> FavoriteItem {
    FavoriteItem::new(args.id, args.name, args.price)
        .with_unit(args.unit)
        .with_farmer(args.farmer)
        .with_location(args.location)
        .with_image(args.image)
}

fn list(store: &Store, format: OutputFormat) -> Result<(), serde_json::Error> {
    let favorites = store.favorites();
    match format {
        OutputFormat::Human if favorites.is_empty() => println!("No favorites yet"),
        OutputFormat::Human => {
            output::print_table(&FAVORITE_HEADERS, &output::favorite_rows(&favorites))
        }
        OutputFormat::Json => output::print_json(&*favorites)?,
    }
    Ok(())
}
