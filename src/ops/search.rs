// src/ops/search.rs
// Name search over the product catalog

use super::types::{Product, SearchInput};
use crate::db::Database;
use crate::error::{OpError, Result};
use rusqlite::params;
use tracing::debug;

/// Escape LIKE wildcards so the term is matched literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Products whose name contains `search_term`, ignoring case
pub fn search_products_by_name(db: &Database, input: SearchInput) -> Result<Vec<Product>> {
    let term = input.search_term.trim();
    if term.is_empty() {
        return Err(OpError::domain("Search term is required"));
    }

    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    let conn = db.conn();
    let mut stmt = conn.prepare(
        "SELECT id, name, price, category, in_stock FROM products
         WHERE lower(name) LIKE ?1 ESCAPE '\\' ORDER BY id",
    )?;
    let products = stmt
        .query_map(params![pattern], Product::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(term, matches = products.len(), "Product search");
    Ok(products)
}
