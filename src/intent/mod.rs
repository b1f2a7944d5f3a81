// src/intent/mod.rs
// Rule-based intent resolution: free text to (operation, arguments)

mod extract;
pub mod rules;

use crate::config::file::DEFAULT_CATEGORIES;
use crate::registry::{Args, Provenance};
use rules::{Category, GENERAL_HINT};
use serde::Serialize;
use tracing::debug;

/// The resolver's reading of one command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intent {
    pub operation: Option<String>,
    pub arguments: Args,
    pub provenance: Provenance,
    /// Accepted input shapes, set when nothing could be resolved
    pub error: Option<String>,
}

impl Intent {
    pub fn resolved(operation: impl Into<String>, arguments: Args, provenance: Provenance) -> Self {
        Self {
            operation: Some(operation.into()),
            arguments,
            provenance,
            error: None,
        }
    }

    pub fn unresolved(error: impl Into<String>) -> Self {
        Self {
            operation: None,
            arguments: Args::new(),
            provenance: Provenance::Unknown,
            error: Some(error.into()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.operation.is_some()
    }
}

/// Maps command text to an [`Intent`] using the ordered rules in [`rules::PRIORITY`]
#[derive(Debug, Clone)]
pub struct IntentResolver {
    known_categories: Vec<String>,
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl IntentResolver {
    /// `known_categories` are the product categories a list command can name
    /// without the `category` keyword
    pub fn new(known_categories: Vec<String>) -> Self {
        Self { known_categories }
    }

    pub fn resolve(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();

        let Some(category) = Category::classify(&lower) else {
            debug!(input = text, "No category matched");
            return Intent::unresolved(GENERAL_HINT);
        };

        match extract::extract(category, text, &lower, &self.known_categories) {
            Some(extracted) => {
                debug!(?category, operation = extracted.operation, "Intent resolved");
                Intent::resolved(extracted.operation, extracted.arguments, category.provenance())
            }
            None => {
                debug!(?category, input = text, "Category matched but extraction failed");
                Intent::unresolved(category.hint())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn resolve(text: &str) -> Intent {
        IntentResolver::default().resolve(text)
    }

    fn args_of(intent: &Intent) -> Value {
        Value::Object(intent.arguments.clone())
    }

    #[test]
    fn test_list_all_products() {
        let intent = resolve("list all products");
        assert_eq!(intent.operation.as_deref(), Some("list_products"));
        assert!(intent.arguments.is_empty());
        assert_eq!(intent.provenance, Provenance::Primary);
        assert!(intent.error.is_none());
    }

    #[test]
    fn test_add_product_scenario() {
        let intent = resolve("add product: Desk Lamp, price: 39.5, category: Furniture");
        assert_eq!(intent.operation.as_deref(), Some("add_product"));
        assert_eq!(
            args_of(&intent),
            json!({"name": "Desk Lamp", "price": 39.5, "category": "Furniture", "in_stock": true})
        );
    }

    #[test]
    fn test_order_scenario() {
        let intent = resolve("order product 1 quantity 2");
        assert_eq!(intent.operation.as_deref(), Some("create_order"));
        assert_eq!(args_of(&intent), json!({"product_id": 1, "quantity": 2}));
    }

    #[test]
    fn test_update_scenario() {
        let intent = resolve("update product 3 price 12.5 name Desk");
        assert_eq!(intent.operation.as_deref(), Some("update_product"));
        assert_eq!(args_of(&intent), json!({"product_id": 3, "price": 12.5, "name": "Desk"}));
    }

    #[test]
    fn test_no_category_gives_general_hint() {
        let intent = resolve("banana");
        assert!(!intent.is_resolved());
        assert_eq!(intent.provenance, Provenance::Unknown);
        assert_eq!(intent.error.as_deref(), Some(GENERAL_HINT));
    }

    #[test]
    fn test_matched_category_does_not_fall_through() {
        // search keywords match, but there is no usable term; later categories are not tried
        let intent = resolve("find products");
        assert!(!intent.is_resolved());
        assert_eq!(intent.error.as_deref(), Some(Category::Search.hint()));

        let intent = resolve("update product 3");
        assert_eq!(intent.error.as_deref(), Some(Category::UpdateProduct.hint()));
        assert!(intent.arguments.is_empty());
    }

    #[test]
    fn test_search_is_auxiliary() {
        let intent = resolve("search for mouse products");
        assert_eq!(intent.operation.as_deref(), Some("search_products_by_name"));
        assert_eq!(intent.provenance, Provenance::Auxiliary);
    }

    #[test]
    fn test_configured_categories() {
        let resolver = IntentResolver::new(vec!["Garden".into()]);
        let intent = resolver.resolve("show garden products");
        assert_eq!(args_of(&intent), json!({"category": "Garden"}));

        let intent = resolver.resolve("show electronics products");
        assert!(intent.arguments.is_empty());
    }

    #[test]
    fn test_statistics_and_orders() {
        assert_eq!(resolve("get statistics").operation.as_deref(), Some("get_order_statistics"));
        assert_eq!(resolve("product stats").operation.as_deref(), Some("get_statistics"));
        assert_eq!(resolve("cancel order 3").operation.as_deref(), Some("cancel_order"));
        assert_eq!(
            args_of(&resolve("complete order 3")),
            json!({"order_id": 3, "status": "completed"})
        );
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve("LIST ALL PRODUCTS"), resolve("list all products"));
        assert_eq!(resolve("Delete Product 4").operation.as_deref(), Some("delete_product"));
    }
}
