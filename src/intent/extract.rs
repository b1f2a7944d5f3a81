// src/intent/extract.rs
// Per-category argument extraction with keyword-anchored regexes

use super::rules::Category;
use crate::registry::Args;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Operation name and arguments pulled out of a command
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Extracted {
    pub operation: &'static str,
    pub arguments: Args,
}

impl Extracted {
    fn new<const N: usize>(operation: &'static str, pairs: [(&str, Value); N]) -> Self {
        Self {
            operation,
            arguments: pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            // SAFETY: This is a static literal regex pattern; compilation cannot fail.
            #[allow(clippy::expect_used)]
            Regex::new($re).expect($re)
        });
    };
}

// ═══════════════════════════════════════════════════════════════════════
// Patterns
// ═══════════════════════════════════════════════════════════════════════

// Add: "add product: Name, price: 599, category: Furniture"
pattern!(ADD_LABELED_RE, r"(?i)(?:add|create|new) product:\s*(.+?),\s*price:\s*(\d+\.?\d*),\s*category:\s*(\w+)");
// Add: "add product: Name, $599, Furniture"
pattern!(ADD_POSITIONAL_RE, r"(?i)(?:add|create|new) product:\s*(.+?),\s*\$?(\d+\.?\d*),\s*(.+?)(?:\s*$|,)");

// Identifiers (matched against lowercased text)
pattern!(PRODUCT_ID_RE, r"product\s+(?:id\s+|#)?(\d+)");
pattern!(BARE_ID_RE, r"(?:\bid\s+|#)(\d+)");
pattern!(ORDER_ID_RE, r"order\s+(?:id\s+|#)?(\d+)");
pattern!(QUANTITY_RE, r"\b(?:quantity|qty)\s+(\d+)");

// Update fields
pattern!(PRICE_RE, r"(?i)\bprice\s+\$?(\d+\.?\d*)");
pattern!(NAME_RE, r"(?i)\bname\s+(.+?)(?:\s+(?:price|category|in_stock|in stock|out of stock)\b|$)");
pattern!(CATEGORY_RE, r"(?i)\bcategory\s+(\w+)");

// Search: "search for mouse products", "find products named lamp"
pattern!(
    SEARCH_TERM_RE,
    r"(?i)(?:search|find|look\s+for)\s+(?:for\s+)?(?:products?\s+)?(?:named\s+|called\s+)?(.+?)(?:\s+products?)?$"
);

// ═══════════════════════════════════════════════════════════════════════
// Extraction
// ═══════════════════════════════════════════════════════════════════════

/// Run the extractor for `category`.
///
/// `text` is the raw input, `lower` its lowercased form. `None` means the
/// category matched but a required argument was missing.
pub(super) fn extract(
    category: Category,
    text: &str,
    lower: &str,
    known_categories: &[String],
) -> Option<Extracted> {
    match category {
        Category::List => Some(list(text, lower, known_categories)),
        Category::Search => search(text),
        Category::Add => add_product(text, lower),
        Category::CreateOrder => create_order(lower),
        Category::GetProduct => {
            let id = capture_int(&PRODUCT_ID_RE, lower).or_else(|| capture_int(&BARE_ID_RE, lower))?;
            Some(Extracted::new("get_product", [("product_id", id.into())]))
        }
        Category::UpdateProduct => update_product(text, lower),
        Category::DeleteProduct => {
            let id = capture_int(&PRODUCT_ID_RE, lower)?;
            Some(Extracted::new("delete_product", [("product_id", id.into())]))
        }
        Category::Statistics => Some(statistics(lower)),
        Category::GetOrder => {
            let id = capture_int(&ORDER_ID_RE, lower)?;
            Some(Extracted::new("get_order", [("order_id", id.into())]))
        }
        Category::UpdateOrderStatus => update_order_status(lower),
        Category::CancelOrder => {
            let id = capture_int(&ORDER_ID_RE, lower)?;
            Some(Extracted::new("cancel_order", [("order_id", id.into())]))
        }
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)?.get(1).map(|m| m.as_str())
}

fn capture_int(re: &Regex, text: &str) -> Option<i64> {
    capture(re, text)?.parse().ok()
}

fn capture_float(re: &Regex, text: &str) -> Option<f64> {
    capture(re, text)?.parse().ok()
}

/// Status word mentioned in lowercased text, accepting verb forms
fn status_word(lower: &str) -> Option<&'static str> {
    if lower.contains("complete") {
        Some("completed")
    } else if lower.contains("pending") {
        Some("pending")
    } else if lower.contains("cancel") {
        Some("cancelled")
    } else {
        None
    }
}

fn list(text: &str, lower: &str, known_categories: &[String]) -> Extracted {
    if lower.contains("order") {
        let status = ["pending", "completed", "cancelled"]
            .into_iter()
            .find(|s| lower.contains(s));
        return match status {
            Some(status) => Extracted::new("list_orders", [("status", status.into())]),
            None => Extracted::new("list_orders", []),
        };
    }

    let category = known_categories
        .iter()
        .find(|c| lower.contains(&c.to_lowercase()))
        .cloned()
        .or_else(|| capture(&CATEGORY_RE, text).map(str::to_string));
    match category {
        Some(category) => Extracted::new("list_products", [("category", category.into())]),
        None => Extracted::new("list_products", []),
    }
}

fn search(text: &str) -> Option<Extracted> {
    let term = capture(&SEARCH_TERM_RE, text.trim())?
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '?' | '.' | '!'))
        .trim();
    if term.is_empty() || term.eq_ignore_ascii_case("product") || term.eq_ignore_ascii_case("products") {
        return None;
    }
    Some(Extracted::new("search_products_by_name", [("search_term", term.into())]))
}

fn add_product(text: &str, lower: &str) -> Option<Extracted> {
    let caps = ADD_LABELED_RE
        .captures(text)
        .or_else(|| ADD_POSITIONAL_RE.captures(text))?;

    let name = caps.get(1)?.as_str().trim();
    let price: f64 = caps.get(2)?.as_str().parse().ok()?;
    let category = caps.get(3)?.as_str().trim();
    if name.is_empty() || category.is_empty() {
        return None;
    }

    Some(Extracted::new(
        "add_product",
        [
            ("name", name.into()),
            ("price", price.into()),
            ("category", category.into()),
            ("in_stock", (!lower.contains("out of stock")).into()),
        ],
    ))
}

fn create_order(lower: &str) -> Option<Extracted> {
    let product_id = capture_int(&PRODUCT_ID_RE, lower)?;
    let quantity = match capture(&QUANTITY_RE, lower) {
        Some(q) => q.parse::<i64>().ok()?,
        None => 1,
    };
    Some(Extracted::new(
        "create_order",
        [("product_id", product_id.into()), ("quantity", quantity.into())],
    ))
}

fn update_product(text: &str, lower: &str) -> Option<Extracted> {
    let product_id = capture_int(&PRODUCT_ID_RE, lower)?;
    let mut extracted = Extracted::new("update_product", [("product_id", product_id.into())]);
    let args = &mut extracted.arguments;

    if let Some(price) = capture_float(&PRICE_RE, text) {
        args.insert("price".into(), price.into());
    }
    if let Some(name) = capture(&NAME_RE, text).map(str::trim).filter(|n| !n.is_empty()) {
        args.insert("name".into(), name.into());
    }
    if let Some(category) = capture(&CATEGORY_RE, text) {
        args.insert("category".into(), category.into());
    }
    if lower.contains("in_stock true") || lower.contains("in stock") {
        args.insert("in_stock".into(), true.into());
    } else if lower.contains("in_stock false") || lower.contains("out of stock") {
        args.insert("in_stock".into(), false.into());
    }

    // product_id alone is not an update
    (args.len() > 1).then_some(extracted)
}

fn statistics(lower: &str) -> Extracted {
    if lower.contains("product") {
        Extracted::new("get_statistics", [])
    } else {
        Extracted::new("get_order_statistics", [])
    }
}

fn update_order_status(lower: &str) -> Option<Extracted> {
    let order_id = capture_int(&ORDER_ID_RE, lower)?;
    let status = status_word(lower)?;
    Some(Extracted::new(
        "update_order_status",
        [("order_id", order_id.into()), ("status", status.into())],
    ))
}
