// src/ops/mod.rs
// Product and order operations, grouped into the sub-registries the agent merges

pub mod orders;
pub mod products;
pub mod search;
pub mod types;

use crate::db::Database;
use crate::registry::{Operation, Param, ParamKind, Provenance, SubRegistry};
use std::sync::Arc;

pub const PRIMARY_GROUP: &str = "primary";
pub const AUXILIARY_GROUP: &str = "auxiliary";

/// Register a typed operation whose handler takes `(&Database, Input)`
macro_rules! op {
    ($db:expr, $provenance:expr, $name:literal, $func:path, [$($param:expr),* $(,)?]) => {{
        let db = Arc::clone(&$db);
        Operation::typed($name, $provenance, vec![$($param),*], move |input| $func(&db, input))
    }};
}

/// Same as `op!` for operations without arguments
macro_rules! op_no_args {
    ($db:expr, $provenance:expr, $name:literal, $func:path) => {{
        let db = Arc::clone(&$db);
        Operation::new($name, $provenance, vec![], move |_| {
            Ok(serde_json::to_value($func(&db)?)?)
        })
    }};
}

/// Product and order actions
pub fn primary_operations(db: Arc<Database>) -> SubRegistry {
    use ParamKind::*;
    let p = Provenance::Primary;

    SubRegistry::new(PRIMARY_GROUP)
        .with(op!(db, p, "list_products", products::list_products, [
            Param::optional("category", String),
        ]))
        .with(op!(db, p, "add_product", products::add_product, [
            Param::required("name", String),
            Param::required("price", Number),
            Param::required("category", String),
            Param::optional("in_stock", Boolean).with_default(true),
        ]))
        .with(op!(db, p, "get_product", products::get_product, [
            Param::required("product_id", Integer),
        ]))
        .with(op!(db, p, "update_product", products::update_product, [
            Param::required("product_id", Integer),
            Param::optional("name", String),
            Param::optional("price", Number),
            Param::optional("category", String),
            Param::optional("in_stock", Boolean),
        ]))
        .with(op!(db, p, "delete_product", products::delete_product, [
            Param::required("product_id", Integer),
        ]))
        .with(op_no_args!(db, p, "get_statistics", products::get_statistics))
        .with(op!(db, p, "create_order", orders::create_order, [
            Param::required("product_id", Integer),
            Param::required("quantity", Integer),
        ]))
        .with(op!(db, p, "list_orders", orders::list_orders, [
            Param::optional("status", String),
        ]))
        .with(op!(db, p, "get_order", orders::get_order, [
            Param::required("order_id", Integer),
        ]))
        .with(op!(db, p, "update_order_status", orders::update_order_status, [
            Param::required("order_id", Integer),
            Param::required("status", String),
        ]))
        .with(op!(db, p, "cancel_order", orders::cancel_order, [
            Param::required("order_id", Integer),
        ]))
        .with(op_no_args!(db, p, "get_order_statistics", orders::get_order_statistics))
}

/// Read-only derived operations
pub fn auxiliary_operations(db: Arc<Database>) -> SubRegistry {
    SubRegistry::new(AUXILIARY_GROUP).with(op!(
        db,
        Provenance::Auxiliary,
        "search_products_by_name",
        search::search_products_by_name,
        [Param::required("search_term", ParamKind::String)]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Args, Registry};
    use serde_json::{Value, json};

    fn args(value: Value) -> Args {
        value.as_object().cloned().unwrap_or_default()
    }

    fn registry() -> Registry {
        let db = Arc::new(Database::open_in_memory().unwrap());
        db.seed_if_empty().unwrap();
        Registry::merge([primary_operations(Arc::clone(&db)), auxiliary_operations(db)])
    }

    #[test]
    fn test_catalog_names() {
        let listing = registry().list_names();
        assert_eq!(listing.total, 13);
        assert_eq!(listing.groups[0].group, PRIMARY_GROUP);
        assert_eq!(listing.groups[0].operations.len(), 12);
        assert_eq!(listing.groups[1].group, AUXILIARY_GROUP);
        assert_eq!(listing.groups[1].operations, vec!["search_products_by_name"]);
    }

    #[test]
    fn test_provenance_per_group() {
        let registry = registry();
        assert_eq!(registry.get("list_orders").unwrap().provenance(), Provenance::Primary);
        assert_eq!(
            registry.get("search_products_by_name").unwrap().provenance(),
            Provenance::Auxiliary
        );
    }

    #[test]
    fn test_operations_produce_json_payloads() {
        let registry = registry();

        let op = registry.get("get_product").unwrap();
        let product = op.invoke(args(json!({"product_id": 2}))).unwrap();
        assert_eq!(product["name"], "Wireless Mouse");
        assert_eq!(product["in_stock"], true);

        let op = registry.get("create_order").unwrap();
        let order = op.invoke(args(json!({"product_id": 2, "quantity": 3}))).unwrap();
        assert_eq!(order["order_id"], 1);
        assert_eq!(order["unit_price"], 49.99);
        assert_eq!(order["status"], "pending");

        let stats = registry.get("get_order_statistics").unwrap().invoke(Args::new()).unwrap();
        assert_eq!(stats["total_orders"], 1);
    }

    #[test]
    fn test_add_product_default_in_stock() {
        let registry = registry();
        let op = registry.get("add_product").unwrap();
        let bound = op
            .bind(args(json!({"name": "Lamp", "price": 20, "category": "Furniture"})))
            .unwrap();
        let product = op.invoke(bound).unwrap();
        assert_eq!(product["id"], 6);
        assert_eq!(product["in_stock"], true);
        assert_eq!(product["price"], 20.0);
    }
}
