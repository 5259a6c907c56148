//! Category seeder for Tally development and testing.
//!
//! Populates the shared categories table with the default category list and
//! a useful set of subcategories for each. Safe to re-run: existing rows are
//! overwritten.
//!
//! Usage: cargo run --bin seeder

use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};
use serde_json::json;
use tally_db::entities::categories;

/// Default categories with their subcategory lists.
const CATEGORY_DATA: [(&str, &[&str]); 10] = [
    ("Food & Dining", &["Groceries", "Restaurants", "Coffee"]),
    ("Transportation", &["Fuel", "Public Transit", "Parking"]),
    ("Shopping", &["Clothing", "Electronics", "Household"]),
    ("Entertainment", &["Movies", "Games", "Subscriptions"]),
    ("Bills & Utilities", &["Rent", "Electricity", "Internet", "Phone"]),
    ("Healthcare", &["Doctor", "Pharmacy", "Insurance"]),
    ("Travel", &["Flights", "Hotels", "Local Transport"]),
    ("Education", &["Tuition", "Books", "Courses"]),
    ("Business", &["Supplies", "Software", "Services"]),
    ("Other", &[]),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tally_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding categories...");
    seed_categories(&db).await;

    println!("Seeding complete!");
}

async fn seed_categories(db: &DatabaseConnection) {
    for (name, subcategories) in CATEGORY_DATA {
        let row = categories::ActiveModel {
            name: Set(name.to_string()),
            subcategories: Set(json!(subcategories)),
        };

        categories::Entity::insert(row)
            .on_conflict(
                OnConflict::column(categories::Column::Name)
                    .update_column(categories::Column::Subcategories)
                    .to_owned(),
            )
            .exec(db)
            .await
            .expect("Failed to seed category");

        println!("  {name}");
    }
}
