// src/ops/types.rs
// Records returned by operations and the typed inputs they accept

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product record as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            price: row.get("price")?,
            category: row.get("category")?,
            in_stock: row.get("in_stock")?,
        })
    }
}

/// Order record joined with its product name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: String,
}

impl Order {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let status: String = row.get("status")?;
        let status = status.parse::<OrderStatus>().map_err(|e| {
            let index = row.as_ref().column_index("status").unwrap_or_default();
            rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, e.into())
        })?;
        Ok(Self {
            order_id: row.get("order_id")?,
            product_id: row.get("product_id")?,
            product_name: row.get("product_name")?,
            quantity: row.get("quantity")?,
            total_price: row.get("total_price")?,
            status,
            created_at: row.get("created_at")?,
        })
    }
}

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!(
                "Invalid status. Must be one of: {}",
                OrderStatus::ALL.map(|s| s.as_str()).join(", ")
            )),
        }
    }
}

// ── Inputs ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsInput {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddProductInput {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductIdInput {
    pub product_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductInput {
    pub product_id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl UpdateProductInput {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.price.is_some() || self.category.is_some() || self.in_stock.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderInput {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersInput {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderIdInput {
    pub order_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub order_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchInput {
    pub search_term: String,
}

// ── Outputs ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct DeletedProduct {
    pub deleted: bool,
    pub product_id: i64,
    pub product_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelledOrder {
    pub order_id: i64,
    pub status: OrderStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStatistics {
    pub total_count: i64,
    pub average_price: f64,
    pub categories: Vec<String>,
    pub in_stock_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatistics {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub completed_orders: i64,
    pub cancelled_orders: i64,
    pub total_revenue: f64,
}

/// Round a currency amount to cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
