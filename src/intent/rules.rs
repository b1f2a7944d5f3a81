// src/intent/rules.rs
// Command categories, their keywords and the fixed order they are tried in

use crate::registry::Provenance;

/// Shown when no category matches at all
pub const GENERAL_HINT: &str = "Could not parse intent. Try: 'list products', 'add product: Name, price: X, category: Y', 'order product 1 quantity 2', 'update product 1 price 999', 'delete product 1', 'get statistics'";

// ═══════════════════════════════════════════════════════════════════════
// Keyword Lists (lowercased, substring match)
// ═══════════════════════════════════════════════════════════════════════

const LIST_KEYWORDS: &[&str] = &["list", "show", "display", "get all", "all products", "all orders"];
const SEARCH_KEYWORDS: &[&str] = &["search", "find", "look for"];
const ADD_KEYWORDS: &[&str] = &["add product", "create product", "new product"];
const CREATE_ORDER_KEYWORDS: &[&str] = &["order product", "buy", "purchase", "create order"];
const GET_PRODUCT_KEYWORDS: &[&str] = &["get product", "find product", "show product"];
const UPDATE_PRODUCT_KEYWORDS: &[&str] = &["update product", "change product", "modify product"];
const DELETE_PRODUCT_KEYWORDS: &[&str] = &["delete product", "remove product"];
const STATISTICS_KEYWORDS: &[&str] = &["statistics", "stats", "summary"];
const GET_ORDER_KEYWORDS: &[&str] = &["get order", "show order", "find order"];
const UPDATE_ORDER_KEYWORDS: &[&str] = &["update order", "change order status", "complete order"];
const CANCEL_ORDER_KEYWORDS: &[&str] = &["cancel order"];

/// A family of commands recognized by keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    List,
    Search,
    Add,
    CreateOrder,
    GetProduct,
    UpdateProduct,
    DeleteProduct,
    Statistics,
    GetOrder,
    UpdateOrderStatus,
    CancelOrder,
}

/// Evaluation order. The first matching category wins, even when a later
/// one would also match.
pub const PRIORITY: [Category; 11] = [
    Category::List,
    Category::Search,
    Category::Add,
    Category::CreateOrder,
    Category::GetProduct,
    Category::UpdateProduct,
    Category::DeleteProduct,
    Category::Statistics,
    Category::GetOrder,
    Category::UpdateOrderStatus,
    Category::CancelOrder,
];

impl Category {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::List => LIST_KEYWORDS,
            Category::Search => SEARCH_KEYWORDS,
            Category::Add => ADD_KEYWORDS,
            Category::CreateOrder => CREATE_ORDER_KEYWORDS,
            Category::GetProduct => GET_PRODUCT_KEYWORDS,
            Category::UpdateProduct => UPDATE_PRODUCT_KEYWORDS,
            Category::DeleteProduct => DELETE_PRODUCT_KEYWORDS,
            Category::Statistics => STATISTICS_KEYWORDS,
            Category::GetOrder => GET_ORDER_KEYWORDS,
            Category::UpdateOrderStatus => UPDATE_ORDER_KEYWORDS,
            Category::CancelOrder => CANCEL_ORDER_KEYWORDS,
        }
    }

    /// Whether lowercased `text` belongs to this category
    pub fn matches(&self, text: &str) -> bool {
        let keyword_hit = self.keywords().iter().any(|kw| text.contains(kw));
        match self {
            Category::Search => keyword_hit && text.contains("product"),
            _ => keyword_hit,
        }
    }

    /// First category in [`PRIORITY`] order that matches lowercased `text`
    pub fn classify(text: &str) -> Option<Category> {
        PRIORITY.into_iter().find(|category| category.matches(text))
    }

    pub fn provenance(&self) -> Provenance {
        match self {
            Category::Search => Provenance::Auxiliary,
            _ => Provenance::Primary,
        }
    }

    /// Accepted input shapes, reported when the category matched but its
    /// arguments could not be extracted
    pub fn hint(&self) -> &'static str {
        match self {
            Category::List => {
                "Could not parse list request. Try: 'list products', 'list electronics products' or 'list pending orders'"
            }
            Category::Search => {
                "Could not parse search. Try: 'search for mouse products' or 'find products named lamp'"
            }
            Category::Add => {
                "Could not parse product. Try: 'add product: Name, price: X, category: Y' or 'add product: Name, $X, Category'"
            }
            Category::CreateOrder => "Could not parse order. Try: 'order product 1 quantity 2'",
            Category::GetProduct => "Could not parse product id. Try: 'get product 1'",
            Category::UpdateProduct => {
                "Could not parse update. Try: 'update product 1 price 999', 'update product 1 name New Name' or 'update product 1 out of stock'"
            }
            Category::DeleteProduct => "Could not parse product id. Try: 'delete product 1'",
            Category::Statistics => "Could not parse statistics request. Try: 'product statistics' or 'order stats'",
            Category::GetOrder => "Could not parse order id. Try: 'get order 1'",
            Category::UpdateOrderStatus => {
                "Could not parse status update. Try: 'update order 1 status completed' or 'complete order 1'"
            }
            Category::CancelOrder => "Could not parse order id. Try: 'cancel order 1'",
        }
    }
}
