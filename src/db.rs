// src/db.rs
// SQLite storage for products and orders

use crate::error::Result;
use anyhow::Context;
use rusqlite::{Connection, Transaction, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    category TEXT NOT NULL,
    in_stock INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL REFERENCES products(id),
    quantity INTEGER NOT NULL,
    total_price REAL NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_orders_product ON orders(product_id);
CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status);
"#;

/// Demo catalog written into an empty database when seeding is enabled
const SEED_PRODUCTS: &[(&str, f64, &str, bool)] = &[
    ("Gaming Laptop", 1299.99, "Electronics", true),
    ("Wireless Mouse", 49.99, "Electronics", true),
    ("Mechanical Keyboard", 129.99, "Electronics", true),
    ("4K Monitor", 399.99, "Electronics", true),
    ("USB-C Hub", 69.99, "Accessories", false),
];

/// Database wrapper shared by every operation
pub struct Database {
    conn: Mutex<Connection>,
    path: Option<String>,
}

impl Database {
    /// Open database at path, creating it and its parent directory if needed
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory {:?}", parent))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {:?}", path))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        let db = Self {
            conn: Mutex::new(conn),
            path: Some(path.to_string_lossy().into_owned()),
        };
        db.init_schema()?;
        info!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;

        let db = Self {
            conn: Mutex::new(conn),
            path: None,
        };
        db.init_schema()?;
        Ok(db)
    }

    /// File path, `None` for in-memory databases
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get a lock on the connection.
    ///
    /// A panic while the lock was held poisons the mutex. The guard is
    /// recovered anyway: an open transaction is rolled back when it is
    /// dropped during unwinding, so the connection is still consistent.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering database connection after a panic");
            self.conn.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Run `f` inside a transaction; commits on `Ok`, rolls back on `Err`
    pub fn transaction<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Initialize schema (idempotent)
    fn init_schema(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert the demo catalog if there are no products yet.
    ///
    /// Returns the number of products inserted.
    pub fn seed_if_empty(&self) -> Result<usize> {
        self.transaction(|tx| {
            let existing: i64 = tx.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
            if existing > 0 {
                debug!(existing, "Catalog already seeded");
                return Ok(0);
            }

            let now = chrono::Utc::now().to_rfc3339();
            for (name, price, category, in_stock) in SEED_PRODUCTS {
                tx.execute(
                    "INSERT INTO products (name, price, category, in_stock, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![name, price, category, in_stock, now],
                )?;
            }
            info!(count = SEED_PRODUCTS.len(), "Seeded demo catalog");
            Ok(SEED_PRODUCTS.len())
        })
    }
}
