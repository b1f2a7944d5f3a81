// src/ops/orders.rs
// Order operations - create, list, get, status changes, statistics

use super::products::{find_product, not_found as product_not_found};
use super::types::{
    CancelledOrder, CreateOrderInput, CreatedOrder, ListOrdersInput, Order, OrderIdInput,
    OrderStatistics, OrderStatus, UpdateOrderStatusInput, round_cents,
};
use crate::db::Database;
use crate::error::{OpError, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

const ORDER_SELECT: &str = r#"
    SELECT o.id AS order_id, o.product_id AS product_id, p.name AS product_name,
           o.quantity AS quantity, o.total_price AS total_price, o.status AS status,
           o.created_at AS created_at
    FROM orders o
    JOIN products p ON p.id = o.product_id
"#;

/// Place an order; the product lookup and insert share one transaction
pub fn create_order(db: &Database, input: CreateOrderInput) -> Result<CreatedOrder> {
    let created = db.transaction(|tx| {
        let product = find_product(tx, input.product_id)?
            .ok_or_else(|| product_not_found(input.product_id))?;

        if !product.in_stock {
            return Err(OpError::domain(format!("{} is out of stock", product.name)));
        }
        if input.quantity <= 0 {
            return Err(OpError::domain("Quantity must be positive"));
        }

        let total_price = round_cents(product.price * input.quantity as f64);
        tx.execute(
            "INSERT INTO orders (product_id, quantity, total_price, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                product.id,
                input.quantity,
                total_price,
                OrderStatus::Pending.as_str(),
                chrono::Utc::now().to_rfc3339()
            ],
        )?;
        let order = fetch_order(tx, tx.last_insert_rowid())?;

        Ok(CreatedOrder {
            order,
            unit_price: product.price,
        })
    })?;

    info!(
        order_id = created.order.order_id,
        product_id = created.order.product_id,
        quantity = created.order.quantity,
        "Order created"
    );
    Ok(created)
}

/// List orders newest first (highest id), optionally filtered by status
pub fn list_orders(db: &Database, input: ListOrdersInput) -> Result<Vec<Order>> {
    let status = match input.status.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(s) => Some(s.parse::<OrderStatus>().map_err(OpError::Domain)?),
        None => None,
    };

    let conn = db.conn();
    let orders = match status {
        Some(status) => {
            let mut stmt = conn.prepare(&format!(
                "{ORDER_SELECT} WHERE o.status = ?1 ORDER BY o.id DESC"
            ))?;
            let rows = stmt
                .query_map(params![status.as_str()], Order::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "{ORDER_SELECT} ORDER BY o.id DESC"
            ))?;
            let rows = stmt
                .query_map([], Order::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };
    Ok(orders)
}

/// Get one order by id
pub fn get_order(db: &Database, input: OrderIdInput) -> Result<Order> {
    let conn = db.conn();
    fetch_order(&conn, input.order_id)
}

/// Set an order's status
pub fn update_order_status(db: &Database, input: UpdateOrderStatusInput) -> Result<Order> {
    let status: OrderStatus = input.status.parse().map_err(OpError::Domain)?;

    let order = db.transaction(|tx| {
        fetch_order(tx, input.order_id)?;
        tx.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            params![status.as_str(), input.order_id],
        )?;
        fetch_order(tx, input.order_id)
    })?;

    info!(order_id = order.order_id, status = %order.status, "Order status updated");
    Ok(order)
}

/// Cancel a pending order
pub fn cancel_order(db: &Database, input: OrderIdInput) -> Result<CancelledOrder> {
    let order_id = input.order_id;
    let cancelled = db.transaction(|tx| {
        let order = fetch_order(tx, order_id)?;
        match order.status {
            OrderStatus::Completed => return Err(OpError::domain("Cannot cancel a completed order")),
            OrderStatus::Cancelled => return Err(OpError::domain("Order is already cancelled")),
            OrderStatus::Pending => {}
        }

        tx.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            params![OrderStatus::Cancelled.as_str(), order_id],
        )?;
        Ok(CancelledOrder {
            order_id,
            status: OrderStatus::Cancelled,
            message: format!("Order {order_id} has been cancelled"),
        })
    })?;

    info!(order_id, "Order cancelled");
    Ok(cancelled)
}

/// Order statistics; revenue counts completed orders only and is rounded to cents
pub fn get_order_statistics(db: &Database) -> Result<OrderStatistics> {
    let orders = list_orders(db, ListOrdersInput::default())?;

    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count() as i64;
    let revenue: f64 = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total_price)
        .sum();

    Ok(OrderStatistics {
        total_orders: orders.len() as i64,
        pending_orders: count(OrderStatus::Pending),
        completed_orders: count(OrderStatus::Completed),
        cancelled_orders: count(OrderStatus::Cancelled),
        total_revenue: round_cents(revenue),
    })
}

fn fetch_order(conn: &Connection, id: i64) -> Result<Order> {
    conn.query_row(
        &format!("{ORDER_SELECT} WHERE o.id = ?1"),
        params![id],
        Order::from_row,
    )
    .optional()?
    .ok_or_else(|| OpError::domain(format!("Order {id} not found")))
}
