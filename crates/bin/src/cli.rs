//! CLI argument definitions for the Kisan binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kisan::{
    ProductId, Quantity,
    constants::{DEFAULT_DELIVERY_FEE, DEFAULT_NAMESPACE},
};
use rust_decimal::Decimal;

/// Kisan Direct cart and favorites
#[derive(Parser, Debug)]
#[command(name = "kisan")]
#[command(about = "Kisan Direct: manage the shopping cart and favorites")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the store snapshot lives
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// Directory holding the snapshot file
    #[arg(
        short = 'D',
        long,
        global = true,
        default_value = ".",
        env = "KISAN_DATA_DIR"
    )]
    pub data_dir: PathBuf,

    /// Storage key; the snapshot file is <namespace>.json
    #[arg(long, global = true, default_value = DEFAULT_NAMESPACE, env = "KISAN_NAMESPACE")]
    pub namespace: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the shopping cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Manage favorite products
    #[command(subcommand, alias = "fav")]
    Favorites(FavoritesCommand),
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// List cart lines
    List,
    /// Add a product, merging with an existing line for the same id
    Add(CartAddArgs),
    /// Remove the line for a product
    Remove {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Set the quantity of a line
    SetQuantity {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
        #[arg(value_parser = parse_quantity)]
        quantity: Quantity,
    },
    /// Remove every line
    Clear,
    /// Show item count, subtotal, delivery fee and total
    Summary {
        /// Flat delivery fee added to the subtotal
        #[arg(
            long,
            default_value_t = Decimal::from(DEFAULT_DELIVERY_FEE),
            env = "KISAN_DELIVERY_FEE"
        )]
        delivery_fee: Decimal,
    },
}

/// Product attributes for a new cart line
#[derive(Args, Debug)]
pub struct CartAddArgs {
    #[arg(long)]
    pub id: i64,
    #[arg(long)]
    pub name: String,
    /// Unit price
    #[arg(long)]
    pub price: Decimal,
    #[arg(short, long, default_value = "1", value_parser = parse_quantity)]
    pub quantity: Quantity,
    /// Unit of sale, e.g. kg
    #[arg(long, default_value = "")]
    pub unit: String,
    #[arg(long, default_value = "")]
    pub farmer: String,
    #[arg(long, default_value = "")]
    pub image: String,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorites
    List,
    /// Mark a product as a favorite
    Add(FavoriteArgs),
    /// Unmark a product
    Remove {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Report whether a product is a favorite
    Check {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Add the product if it is not a favorite, remove it otherwise
    Toggle(FavoriteArgs),
    /// Add a favorite to the cart, keeping it as a favorite
    MoveToCart {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
        #[arg(short, long, default_value = "1", value_parser = parse_quantity)]
        quantity: Quantity,
    },
}

/// Product attributes for a favorite
#[derive(Args, Debug)]
pub struct FavoriteArgs {
    #[arg(long)]
    pub id: i64,
    #[arg(long)]
    pub name: String,
    /// Unit price
    #[arg(long)]
    pub price: Decimal,
    #[arg(long, default_value = "")]
    pub unit: String,
    #[arg(long, default_value = "")]
    pub farmer: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub image: String,
}

fn parse_product_id(value: &str) -> Result<ProductId, String> {
    value
        .parse::<i64>()
        .map(ProductId::new)
        .map_err(|e| format!("invalid product id '{value}': {e}"))
}

fn parse_quantity(value: &str) -> Result<Quantity, String> {
    let raw = value
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity '{value}': {e}"))?;
    Quantity::try_from(raw).map_err(|e| e.to_string())
}
