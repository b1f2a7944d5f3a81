// src/render/products.rs
// Formatters for product operations

use super::{field, records};
use serde_json::Value;

fn in_stock(p: &Value) -> bool {
    p.get("in_stock").and_then(Value::as_bool).unwrap_or(false)
}

/// One product as a list line
fn product_line(p: &Value) -> String {
    let stock = if in_stock(p) { "✅ In Stock" } else { "❌ Out of Stock" };
    format!(
        "  • ID {}: {} - ${} ({}) - {}",
        field(p, "id"),
        field(p, "name"),
        field(p, "price"),
        field(p, "category"),
        stock
    )
}

fn product_lines(header: String, products: &[Value]) -> String {
    let mut lines = vec![header];
    lines.extend(products.iter().map(product_line));
    lines.join("\n")
}

/// Format list_products results
pub fn product_list(result: &Value) -> String {
    let products = records(result);
    if products.is_empty() {
        return "📦 No products found.".to_string();
    }
    product_lines(format!("📦 Found {} products:", products.len()), products)
}

/// Format search_products_by_name results
pub fn search_results(result: &Value) -> String {
    let products = records(result);
    if products.is_empty() {
        return "🔍 No products found matching your search.".to_string();
    }
    product_lines(format!("🔍 Found {} matching products:", products.len()), products)
}

pub fn product_added(p: &Value) -> String {
    format!(
        "✅ Product added:\n  • ID: {}\n  • Name: {}\n  • Price: ${}\n  • Category: {}",
        field(p, "id"),
        field(p, "name"),
        field(p, "price"),
        field(p, "category")
    )
}

pub fn product_details(p: &Value) -> String {
    let stock = if in_stock(p) { "In Stock" } else { "Out of Stock" };
    format!(
        "📦 Product:\n  • ID: {}\n  • Name: {}\n  • Price: ${}\n  • Category: {}\n  • Status: {}",
        field(p, "id"),
        field(p, "name"),
        field(p, "price"),
        field(p, "category"),
        stock
    )
}

pub fn product_updated(p: &Value) -> String {
    format!(
        "✅ Product updated:\n  • ID: {}\n  • Name: {}\n  • Price: ${}\n  • Category: {}\n  • In Stock: {}",
        field(p, "id"),
        field(p, "name"),
        field(p, "price"),
        field(p, "category"),
        if in_stock(p) { "Yes" } else { "No" }
    )
}

pub fn product_deleted(result: &Value) -> String {
    format!(
        "✅ Deleted product: {} (ID: {})",
        field(result, "product_name"),
        field(result, "product_id")
    )
}

pub fn product_statistics(stats: &Value) -> String {
    let categories: Vec<String> = records(&stats["categories"])
        .iter()
        .map(|c| c.as_str().map(str::to_string).unwrap_or_else(|| c.to_string()))
        .collect();
    let categories = if categories.is_empty() {
        "none".to_string()
    } else {
        categories.join(", ")
    };

    format!(
        "📊 Product Statistics:\n  • Total Products: {}\n  • Average Price: ${}\n  • Categories: {}\n  • In Stock: {}",
        field(stats, "total_count"),
        field(stats, "average_price"),
        categories,
        field(stats, "in_stock_count")
    )
}
