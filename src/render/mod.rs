// src/render/mod.rs
// Human-readable rendering of operation results, keyed by operation name

mod orders;
mod products;

#[cfg(test)]
mod tests;

pub use orders::{
    order_cancelled, order_created, order_details, order_list, order_statistics, order_status_updated,
};
pub use products::{
    product_added, product_deleted, product_details, product_list, product_statistics,
    product_updated, search_results,
};

use serde_json::Value;
use std::collections::HashMap;

/// Formatter for one operation's success payload
pub type Template = fn(&Value) -> String;

/// Lookup table from operation name to formatter, with a structural fallback
#[derive(Debug, Clone)]
pub struct Renderer {
    templates: HashMap<&'static str, Template>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Renderer {
    /// Formatters for every product and order operation
    pub fn standard() -> Self {
        let templates: [(&'static str, Template); 13] = [
            ("list_products", product_list),
            ("add_product", product_added),
            ("get_product", product_details),
            ("update_product", product_updated),
            ("delete_product", product_deleted),
            ("get_statistics", product_statistics),
            ("search_products_by_name", search_results),
            ("create_order", order_created),
            ("list_orders", order_list),
            ("get_order", order_details),
            ("update_order_status", order_status_updated),
            ("cancel_order", order_cancelled),
            ("get_order_statistics", order_statistics),
        ];
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// Add or replace the formatter for `operation`
    pub fn with_template(mut self, operation: &'static str, template: Template) -> Self {
        self.templates.insert(operation, template);
        self
    }

    /// Operation names with a dedicated formatter, sorted
    pub fn supported(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.templates.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Render `result` for `operation`.
    ///
    /// A `{"success": false}` payload always renders as a single failure line,
    /// whatever the operation. Operations without a formatter get a pretty
    /// JSON dump.
    pub fn render(&self, operation: &str, result: &Value) -> String {
        if let Some(error) = failure(result) {
            return format!("❌ {error}");
        }
        match self.templates.get(operation) {
            Some(template) => template(result),
            None => fallback(result),
        }
    }
}

/// Error text of a failure record
fn failure(result: &Value) -> Option<String> {
    if result.get("success").and_then(Value::as_bool) != Some(false) {
        return None;
    }
    let error = match result.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "Unknown error".to_string(),
        Some(other) => other.to_string(),
    };
    Some(error.lines().next().unwrap_or_default().to_string())
}

fn fallback(result: &Value) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string())
}

/// A field as display text; strings unquoted, numbers as stored, `?` when absent
pub(crate) fn field(v: &Value, key: &str) -> String {
    match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "?".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Records of a list-shaped payload; anything else counts as empty
pub(crate) fn records(v: &Value) -> &[Value] {
    v.as_array().map(Vec::as_slice).unwrap_or(&[])
}
