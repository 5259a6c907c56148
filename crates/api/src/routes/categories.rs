//! Read-only categories resource.
//!
//! Returns a JSON mapping of category name to subcategory list. The category
//! store is best-effort: when it is unreachable the resource falls back to a
//! fixed default list rather than failing.

use axum::{Json, Router, routing::get};
use axum::extract::State;
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::AppState;
use tally_db::repositories::CategoryRepository;

/// The fixed default category list, used when the category store is
/// unreachable.
const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Business",
    "Other",
];

/// GET `/resources/categories` - Category name to subcategory list mapping.
async fn get_categories(State(state): State<AppState>) -> Json<Value> {
    let repo = CategoryRepository::new((*state.db).clone());
    match repo.list_all().await {
        Ok(rows) => {
            let mut mapping = Map::new();
            for row in rows {
                mapping.insert(row.name, row.subcategories);
            }
            Json(Value::Object(mapping))
        }
        Err(e) => {
            warn!(error = %e, "Category store unreachable; serving default categories");
            Json(default_categories())
        }
    }
}

fn default_categories() -> Value {
    let mut mapping = Map::new();
    for name in DEFAULT_CATEGORIES {
        mapping.insert(name.to_string(), json!([]));
    }
    Value::Object(mapping)
}

/// Creates the categories resource route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/resources/categories", get(get_categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_shape() {
        let value = default_categories();
        let mapping = value.as_object().unwrap();
        assert_eq!(mapping.len(), 10);
        assert!(mapping.contains_key("Food & Dining"));
        assert!(mapping.contains_key("Other"));
        assert!(mapping.values().all(|subs| subs.as_array().is_some_and(Vec::is_empty)));
    }
}
