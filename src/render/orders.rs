// src/render/orders.rs
// Formatters for order operations

use super::{field, records};
use serde_json::Value;

pub fn order_created(o: &Value) -> String {
    format!(
        "🛒 Order created:\n  • Order ID: {}\n  • Product: {}\n  • Quantity: {}\n  • Total: ${}",
        field(o, "order_id"),
        field(o, "product_name"),
        field(o, "quantity"),
        field(o, "total_price")
    )
}

/// Format list_orders results
pub fn order_list(result: &Value) -> String {
    let orders = records(result);
    if orders.is_empty() {
        return "📋 No orders found.".to_string();
    }

    let mut lines = vec![format!("📋 Found {} orders:", orders.len())];
    for o in orders {
        lines.push(format!(
            "  • Order #{}: {} x{} = ${} ({})",
            field(o, "order_id"),
            field(o, "product_name"),
            field(o, "quantity"),
            field(o, "total_price"),
            field(o, "status")
        ));
    }
    lines.join("\n")
}

pub fn order_details(o: &Value) -> String {
    format!(
        "📋 Order Details:\n  • Order ID: {}\n  • Product: {}\n  • Quantity: {}\n  • Total: ${}\n  • Status: {}",
        field(o, "order_id"),
        field(o, "product_name"),
        field(o, "quantity"),
        field(o, "total_price"),
        field(o, "status")
    )
}

pub fn order_status_updated(o: &Value) -> String {
    format!(
        "✅ Order status updated:\n  • Order ID: {}\n  • Product: {}\n  • New Status: {}",
        field(o, "order_id"),
        field(o, "product_name"),
        field(o, "status")
    )
}

pub fn order_cancelled(result: &Value) -> String {
    format!("✅ {}", field(result, "message"))
}

pub fn order_statistics(stats: &Value) -> String {
    format!(
        "📊 Order Statistics:\n  • Total Orders: {}\n  • Pending: {}\n  • Completed: {}\n  • Cancelled: {}\n  • Total Revenue: ${}",
        field(stats, "total_orders"),
        field(stats, "pending_orders"),
        field(stats, "completed_orders"),
        field(stats, "cancelled_orders"),
        field(stats, "total_revenue")
    )
}
