// src/ops/products.rs
// Product operations - list, add, get, update, delete, statistics

use super::types::{
    AddProductInput, DeletedProduct, ListProductsInput, Product, ProductIdInput, ProductStatistics,
    UpdateProductInput, round_cents,
};
use crate::db::Database;
use crate::error::{OpError, Result};
use rusqlite::{OptionalExtension, Transaction, params};
use tracing::info;

const PRODUCT_COLUMNS: &str = "id, name, price, category, in_stock";

/// List products, optionally restricted to one category
pub fn list_products(db: &Database, input: ListProductsInput) -> Result<Vec<Product>> {
    let conn = db.conn();
    let products = match input.category.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(category) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1 COLLATE NOCASE ORDER BY id"
            ))?;
            let rows = stmt
                .query_map(params![category.trim()], Product::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"))?;
            let rows = stmt
                .query_map([], Product::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };
    Ok(products)
}

/// Add a product and return it with its assigned id
pub fn add_product(db: &Database, input: AddProductInput) -> Result<Product> {
    let name = input.name.trim();
    let category = input.category.trim();
    if name.is_empty() {
        return Err(OpError::domain("Product name is required"));
    }
    if category.is_empty() {
        return Err(OpError::domain("Product category is required"));
    }
    if !(input.price > 0.0) {
        return Err(OpError::domain("Price must be positive"));
    }

    let product = db.transaction(|tx| {
        tx.execute(
            "INSERT INTO products (name, price, category, in_stock, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![name, input.price, category, input.in_stock, chrono::Utc::now().to_rfc3339()],
        )?;
        let id = tx.last_insert_rowid();
        fetch_product(tx, id)
    })?;

    info!(id = product.id, name = %product.name, "Product added");
    Ok(product)
}

/// Get one product by id
pub fn get_product(db: &Database, input: ProductIdInput) -> Result<Product> {
    let conn = db.conn();
    find_product(&conn, input.product_id)?.ok_or_else(|| not_found(input.product_id))
}

/// Apply the supplied fields to a product; absent fields are left unchanged
pub fn update_product(db: &Database, input: UpdateProductInput) -> Result<Product> {
    if !input.has_changes() {
        return Err(OpError::domain("No fields to update"));
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(OpError::domain("Product name is required"));
        }
    }
    if let Some(price) = input.price {
        if !(price > 0.0) {
            return Err(OpError::domain("Price must be positive"));
        }
    }

    let product = db.transaction(|tx| {
        let mut product = find_product(tx, input.product_id)?.ok_or_else(|| not_found(input.product_id))?;

        if let Some(name) = &input.name {
            product.name = name.trim().to_string();
        }
        if let Some(price) = input.price {
            product.price = price;
        }
        if let Some(category) = &input.category {
            product.category = category.trim().to_string();
        }
        if let Some(in_stock) = input.in_stock {
            product.in_stock = in_stock;
        }

        tx.execute(
            "UPDATE products SET name = ?1, price = ?2, category = ?3, in_stock = ?4 WHERE id = ?5",
            params![product.name, product.price, product.category, product.in_stock, product.id],
        )?;
        Ok(product)
    })?;

    info!(id = product.id, "Product updated");
    Ok(product)
}

/// Delete a product that has no orders
pub fn delete_product(db: &Database, input: ProductIdInput) -> Result<DeletedProduct> {
    let id = input.product_id;
    let deleted = db.transaction(|tx| {
        let product = find_product(tx, id)?.ok_or_else(|| not_found(id))?;

        let orders: i64 = tx.query_row(
            "SELECT COUNT(*) FROM orders WHERE product_id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        if orders > 0 {
            return Err(OpError::domain(format!(
                "Product {id} has orders and cannot be deleted"
            )));
        }

        tx.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(DeletedProduct {
            deleted: true,
            product_id: id,
            product_name: product.name,
        })
    })?;

    info!(id, "Product deleted");
    Ok(deleted)
}

/// Catalog statistics; average price is rounded to cents
pub fn get_statistics(db: &Database) -> Result<ProductStatistics> {
    let products = list_products(db, ListProductsInput::default())?;
    if products.is_empty() {
        return Ok(ProductStatistics {
            total_count: 0,
            average_price: 0.0,
            categories: Vec::new(),
            in_stock_count: 0,
        });
    }

    let total_count = products.len() as i64;
    let average_price = products.iter().map(|p| p.price).sum::<f64>() / products.len() as f64;
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    let in_stock_count = products.iter().filter(|p| p.in_stock).count() as i64;

    Ok(ProductStatistics {
        total_count,
        average_price: round_cents(average_price),
        categories,
        in_stock_count,
    })
}

pub(crate) fn find_product(conn: &rusqlite::Connection, id: i64) -> Result<Option<Product>> {
    let product = conn
        .query_row(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
            params![id],
            Product::from_row,
        )
        .optional()?;
    Ok(product)
}

fn fetch_product(tx: &Transaction<'_>, id: i64) -> Result<Product> {
    find_product(tx, id)?.ok_or_else(|| not_found(id))
}

pub(crate) fn not_found(id: i64) -> OpError {
    OpError::domain(format!("Product {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_if_empty().unwrap();
        db
    }

    fn add(db: &Database, name: &str, price: f64, category: &str) -> Product {
        add_product(
            db,
            AddProductInput {
                name: name.into(),
                price,
                category: category.into(),
                in_stock: true,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_list_products_filters_by_category() {
        let db = seeded();
        assert_eq!(list_products(&db, ListProductsInput::default()).unwrap().len(), 5);

        let accessories = list_products(
            &db,
            ListProductsInput {
                category: Some("accessories".into()),
            },
        )
        .unwrap();
        assert_eq!(accessories.len(), 1);
        assert_eq!(accessories[0].name, "USB-C Hub");
        assert!(!accessories[0].in_stock);
    }

    #[test]
    fn test_add_product_assigns_id() {
        let db = Database::open_in_memory().unwrap();
        let lamp = add(&db, "  Desk Lamp ", 39.5, "Furniture");
        assert_eq!(lamp.id, 1);
        assert_eq!(lamp.name, "Desk Lamp");
        assert_eq!(lamp.price, 39.5);
        assert!(lamp.in_stock);
    }

    #[test]
    fn test_add_product_validation() {
        let db = Database::open_in_memory().unwrap();
        let err = add_product(
            &db,
            AddProductInput {
                name: "Lamp".into(),
                price: 0.0,
                category: "Furniture".into(),
                in_stock: true,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Price must be positive");

        let err = add_product(
            &db,
            AddProductInput {
                name: "  ".into(),
                price: 3.0,
                category: "Furniture".into(),
                in_stock: true,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Product name is required");
    }

    #[test]
    fn test_get_product_not_found() {
        let db = Database::open_in_memory().unwrap();
        let err = get_product(&db, ProductIdInput { product_id: 42 }).unwrap_err();
        assert!(matches!(err, OpError::Domain(_)));
        assert_eq!(err.to_string(), "Product 42 not found");
    }

    #[test]
    fn test_update_product_applies_only_present_fields() {
        let db = seeded();
        let updated = update_product(
            &db,
            UpdateProductInput {
                product_id: 3,
                name: Some("Desk".into()),
                price: Some(12.5),
                category: None,
                in_stock: None,
            },
        )
        .unwrap();
        assert_eq!(updated.name, "Desk");
        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.category, "Electronics");

        let reread = get_product(&db, ProductIdInput { product_id: 3 }).unwrap();
        assert_eq!(reread, updated);
    }

    #[test]
    fn test_update_product_requires_a_field() {
        let db = seeded();
        let err = update_product(
            &db,
            UpdateProductInput {
                product_id: 1,
                name: None,
                price: None,
                category: None,
                in_stock: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No fields to update");
    }

    #[test]
    fn test_delete_product() {
        let db = seeded();
        let deleted = delete_product(&db, ProductIdInput { product_id: 2 }).unwrap();
        assert_eq!(deleted.product_name, "Wireless Mouse");
        assert!(get_product(&db, ProductIdInput { product_id: 2 }).is_err());

        let err = delete_product(&db, ProductIdInput { product_id: 2 }).unwrap_err();
        assert_eq!(err.to_string(), "Product 2 not found");
    }

    #[test]
    fn test_statistics() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(get_statistics(&db).unwrap().total_count, 0);

        add(&db, "Chair", 10.0, "Furniture");
        add(&db, "Cable", 5.0, "Accessories");
        add(&db, "Desk", 10.01, "Furniture");

        let stats = get_statistics(&db).unwrap();
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.average_price, 8.34);
        assert_eq!(stats.categories, vec!["Accessories", "Furniture"]);
        assert_eq!(stats.in_stock_count, 3);
    }
}
