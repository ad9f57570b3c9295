/// Seed the `menuitem` collection.
///
/// Usage: seed-menu [--file PATH] [--dry-run]
///   --file PATH : JSON array of menu items (built-in Flavor Factory menu if omitted)
///   --dry-run   : validate only, write nothing

use clap::Parser;
use flavor_factory_api::models::{MenuItem, Record, MENU_COLLECTION};
use flavor_factory_api::{connect_store, DocumentService, Settings};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed-menu", about = "Insert menu items into the Flavor Factory database")]
struct Args {
    /// JSON file holding an array of menu items
    #[arg(long)]
    file: Option<PathBuf>,

    /// Validate the items without writing them
    #[arg(long)]
    dry_run: bool,
}

fn default_menu() -> Value {
    json!([
        {"name": "Classic Smash Burger", "description": "Double patty, cheddar, house sauce", "price": 9.5, "category": "Burgers"},
        {"name": "Spicy Chicken Burger", "description": "Crispy thigh, pepper mayo", "price": 8.75, "category": "Burgers"},
        {"name": "Grilled Tilapia Plate", "description": "Whole tilapia with plantain", "price": 14.0, "category": "Mains", "is_drive_thru_friendly": false},
        {"name": "Loaded Fries", "price": 4.5, "category": "Sides"},
        {"name": "Fried Plantain", "price": 3.0, "category": "Sides"},
        {"name": "Ginger Lemonade", "price": 2.5, "category": "Drinks"},
        {"name": "Vanilla Milkshake", "price": 4.0, "category": "Dessert"}
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let items = match &args.file {
        Some(path) => serde_json::from_str(&tokio::fs::read_to_string(path).await?)?,
        None => default_menu(),
    };
    let Value::Array(items) = items else {
        return Err("menu file must hold a JSON array".into());
    };

    let mut valid = Vec::with_capacity(items.len());
    for (i, raw) in items.into_iter().enumerate() {
        let Value::Object(raw) = raw else {
            tracing::warn!("item {}: not a JSON object, skipped", i);
            continue;
        };
        match MenuItem::from_raw(raw) {
            Ok(item) => valid.push(item),
            Err(e) => tracing::warn!("item {}: {}, skipped", i, e),
        }
    }
    tracing::info!("{} valid menu items", valid.len());

    if args.dry_run {
        return Ok(());
    }

    let settings = Settings::from_env()?;
    let store = connect_store(&settings)
        .await
        .ok_or("DATABASE_URL and DATABASE_NAME must be set to seed the menu")?;

    for item in &valid {
        let id = DocumentService::create_document(store.as_ref(), MENU_COLLECTION, item).await?;
        tracing::info!("inserted {} ({})", item.name, id);
    }
    Ok(())
}
