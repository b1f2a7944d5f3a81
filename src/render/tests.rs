// src/render/tests.rs
// Table-driven tests for the result renderer

use super::*;
use serde_json::json;

fn render(operation: &str, result: Value) -> String {
    Renderer::standard().render(operation, &result)
}

fn lamp() -> Value {
    json!({"id": 7, "name": "Desk Lamp", "price": 39.5, "category": "Furniture", "in_stock": true})
}

fn hub() -> Value {
    json!({"id": 5, "name": "USB-C Hub", "price": 69.99, "category": "Accessories", "in_stock": false})
}

fn order() -> Value {
    json!({
        "order_id": 3,
        "product_id": 2,
        "product_name": "Wireless Mouse",
        "quantity": 2,
        "total_price": 99.98,
        "status": "pending",
        "created_at": "2026-01-01T00:00:00+00:00"
    })
}

// === Failure Shortcut ===

#[test]
fn test_failure_record_wins_for_every_operation() {
    let failure = json!({"success": false, "error": "Wireless Mouse is out of stock"});
    let renderer = Renderer::standard();
    for operation in renderer.supported().into_iter().chain(["not_an_operation"]) {
        assert_eq!(
            renderer.render(operation, &failure),
            "❌ Wireless Mouse is out of stock",
            "{operation}"
        );
    }
}

#[test]
fn test_failure_without_error_text() {
    assert_eq!(render("get_order", json!({"success": false})), "❌ Unknown error");
}

#[test]
fn test_failure_is_one_line() {
    let rendered = render("get_order", json!({"success": false, "error": "first\nsecond"}));
    assert_eq!(rendered, "❌ first");
}

#[test]
fn test_success_true_is_not_a_failure() {
    let rendered = render("cancel_order", json!({"success": true, "message": "done"}));
    assert_eq!(rendered, "✅ done");
}

// === Product Formatters ===

#[test]
fn test_product_templates() {
    let cases: Vec<(&str, Value, &str)> = vec![
        ("list_products", json!([]), "📦 No products found."),
        (
            "list_products",
            json!([lamp(), hub()]),
            "📦 Found 2 products:\n  • ID 7: Desk Lamp - $39.5 (Furniture) - ✅ In Stock\n  • ID 5: USB-C Hub - $69.99 (Accessories) - ❌ Out of Stock",
        ),
        (
            "add_product",
            lamp(),
            "✅ Product added:\n  • ID: 7\n  • Name: Desk Lamp\n  • Price: $39.5\n  • Category: Furniture",
        ),
        (
            "get_product",
            hub(),
            "📦 Product:\n  • ID: 5\n  • Name: USB-C Hub\n  • Price: $69.99\n  • Category: Accessories\n  • Status: Out of Stock",
        ),
        (
            "update_product",
            lamp(),
            "✅ Product updated:\n  • ID: 7\n  • Name: Desk Lamp\n  • Price: $39.5\n  • Category: Furniture\n  • In Stock: Yes",
        ),
        (
            "delete_product",
            json!({"deleted": true, "product_id": 2, "product_name": "Wireless Mouse"}),
            "✅ Deleted product: Wireless Mouse (ID: 2)",
        ),
        (
            "get_statistics",
            json!({"total_count": 5, "average_price": 389.99, "categories": ["Accessories", "Electronics"], "in_stock_count": 4}),
            "📊 Product Statistics:\n  • Total Products: 5\n  • Average Price: $389.99\n  • Categories: Accessories, Electronics\n  • In Stock: 4",
        ),
        ("search_products_by_name", json!([]), "🔍 No products found matching your search."),
        (
            "search_products_by_name",
            json!([lamp()]),
            "🔍 Found 1 matching products:\n  • ID 7: Desk Lamp - $39.5 (Furniture) - ✅ In Stock",
        ),
    ];

    for (operation, result, expected) in cases {
        assert_eq!(render(operation, result), expected, "{operation}");
    }
}

#[test]
fn test_statistics_without_categories() {
    let rendered = render(
        "get_statistics",
        json!({"total_count": 0, "average_price": 0.0, "categories": [], "in_stock_count": 0}),
    );
    assert!(rendered.contains("  • Categories: none"));
    assert!(rendered.contains("Average Price: $0.0"));
}

// === Order Formatters ===

#[test]
fn test_order_templates() {
    let cases: Vec<(&str, Value, &str)> = vec![
        (
            "create_order",
            order(),
            "🛒 Order created:\n  • Order ID: 3\n  • Product: Wireless Mouse\n  • Quantity: 2\n  • Total: $99.98",
        ),
        ("list_orders", json!([]), "📋 No orders found."),
        (
            "list_orders",
            json!([order()]),
            "📋 Found 1 orders:\n  • Order #3: Wireless Mouse x2 = $99.98 (pending)",
        ),
        (
            "get_order",
            order(),
            "📋 Order Details:\n  • Order ID: 3\n  • Product: Wireless Mouse\n  • Quantity: 2\n  • Total: $99.98\n  • Status: pending",
        ),
        (
            "update_order_status",
            json!({"order_id": 3, "product_name": "Wireless Mouse", "status": "completed"}),
            "✅ Order status updated:\n  • Order ID: 3\n  • Product: Wireless Mouse\n  • New Status: completed",
        ),
        (
            "cancel_order",
            json!({"order_id": 3, "status": "cancelled", "message": "Order 3 has been cancelled"}),
            "✅ Order 3 has been cancelled",
        ),
        (
            "get_order_statistics",
            json!({"total_orders": 3, "pending_orders": 1, "completed_orders": 1, "cancelled_orders": 1, "total_revenue": 99.98}),
            "📊 Order Statistics:\n  • Total Orders: 3\n  • Pending: 1\n  • Completed: 1\n  • Cancelled: 1\n  • Total Revenue: $99.98",
        ),
    ];

    for (operation, result, expected) in cases {
        assert_eq!(render(operation, result), expected, "{operation}");
    }
}

// === Fallback and Purity ===

#[test]
fn test_unknown_operation_falls_back_to_sorted_dump() {
    let rendered = render("mystery", json!({"zeta": 1, "alpha": [true]}));
    assert_eq!(rendered, "{\n  \"alpha\": [\n    true\n  ],\n  \"zeta\": 1\n}");
}

#[test]
fn test_missing_fields_render_placeholder() {
    let rendered = render("delete_product", json!({"deleted": true}));
    assert_eq!(rendered, "✅ Deleted product: ? (ID: ?)");
}

#[test]
fn test_rendering_is_idempotent_and_never_empty() {
    let renderer = Renderer::standard();
    let payloads = [json!([]), json!({}), lamp(), order(), json!(null)];
    for operation in renderer.supported().into_iter().chain(["mystery"]) {
        for payload in &payloads {
            let first = renderer.render(operation, payload);
            let second = renderer.render(operation, payload);
            assert_eq!(first, second, "{operation}");
            assert!(!first.is_empty(), "{operation} rendered nothing for {payload}");
        }
    }
}

#[test]
fn test_supported_covers_catalog() {
    let supported = Renderer::standard().supported();
    assert_eq!(supported.len(), 13);
    assert!(supported.contains(&"search_products_by_name"));
    assert!(supported.contains(&"get_order_statistics"));
}

#[test]
fn test_with_template_overrides() {
    fn terse(_: &Value) -> String {
        "ok".to_string()
    }
    let renderer = Renderer::standard().with_template("cancel_order", terse);
    assert_eq!(renderer.render("cancel_order", &json!({"message": "x"})), "ok");
}
