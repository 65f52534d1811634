//! # Domain models for the product dashboard
//!
//! Defines the data structures that flow between the remote facade and the
//! page views. These types are `Serialize + Deserialize` so a real backend
//! client can exchange them over the wire without changes.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated account returned by `login`. Carries a plain `role` tag; no per-role authorization exists. |
//! | [`Product`] | A single catalog record. Identity is `id`, immutable once assigned. |
//! | [`Category`] | The fixed category set. An enum so an out-of-set category is unrepresentable. |
//! | [`PaginatedResponse`] | One page of results plus the reported total, produced fresh per fetch. |
//! | [`SortConfig`] | Column + direction for a list request. The column is an enum, so "column must name a sortable field" holds by construction. |
//! | [`AuthResponse`] | Token + user pair returned by `login`. |
//! | [`ProductInput`] | A fully validated set of product fields, produced by the form schema. |
//! | [`ProductPatch`] | Partial update payload; unset fields keep the target's values. |
//!
//! ## Sort semantics
//!
//! Each column compares with its natural order: `name` and `category`
//! lexicographically, `price` via `f64::total_cmp`, `stock` and `created_at`
//! by their `Ord`. Numeric columns never fall back to string comparison.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    /// Plain role tag, e.g. "admin". Informational only.
    pub role: String,
}

/// Fixed product category set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Clothing, Category::Books];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
        }
    }

    /// Parse a display name back into a category. Returns `None` for
    /// anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Empty record carrying only an identity. Used as the merge base for
    /// partial updates, since the mock backend has no stored state.
    pub fn placeholder(id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            price: 0.0,
            category: Category::Electronics,
            stock: 0,
            created_at: Utc::now(),
        }
    }
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

/// Sortable columns of [`Product`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Name,
    Price,
    Category,
    Stock,
    CreatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Column + direction for a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    /// Sort state after a header click: the same column flips direction,
    /// a new column resets to ascending.
    pub fn toggled(&self, column: SortColumn) -> SortConfig {
        if self.column == column {
            SortConfig {
                column,
                direction: self.direction.flipped(),
            }
        } else {
            SortConfig {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Compare two products under this configuration.
    pub fn ordering(&self, a: &Product, b: &Product) -> Ordering {
        let ord = match self.column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Price => a.price.total_cmp(&b.price),
            SortColumn::Category => a.category.as_str().cmp(b.category.as_str()),
            SortColumn::Stock => a.stock.cmp(&b.stock),
            SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Token + user pair returned by `login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A fully validated set of product fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub stock: u32,
}

impl ProductInput {
    /// Full patch touching every field.
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name),
            price: Some(self.price),
            category: Some(self.category),
            stock: Some(self.stock),
        }
    }
}

/// Partial update payload. Unset fields keep the target's values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64, stock: u32) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            price,
            category: Category::Books,
            stock,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let sort = SortConfig::default();
        assert_eq!(sort.direction, SortDirection::Ascending);

        let once = sort.toggled(SortColumn::Name);
        assert_eq!(once.column, SortColumn::Name);
        assert_eq!(once.direction, SortDirection::Descending);

        // Two toggles on the same column return to ascending.
        let twice = once.toggled(SortColumn::Name);
        assert_eq!(twice.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_column_resets_to_ascending() {
        let sort = SortConfig {
            column: SortColumn::Name,
            direction: SortDirection::Descending,
        };
        let next = sort.toggled(SortColumn::Price);
        assert_eq!(next.column, SortColumn::Price);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_price_sorts_numerically_not_lexicographically() {
        let a = product("a", 2.0, 0);
        let b = product("b", 10.0, 0);
        let sort = SortConfig {
            column: SortColumn::Price,
            direction: SortDirection::Ascending,
        };
        // As strings "10" < "2"; numerically 2 < 10.
        assert_eq!(sort.ordering(&a, &b), Ordering::Less);

        let desc = SortConfig {
            direction: SortDirection::Descending,
            ..sort
        };
        assert_eq!(desc.ordering(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_stock_sorts_numerically() {
        let a = product("a", 0.0, 9);
        let b = product("b", 0.0, 11);
        let sort = SortConfig {
            column: SortColumn::Stock,
            direction: SortDirection::Ascending,
        };
        assert_eq!(sort.ordering(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_name_sorts_lexicographically() {
        let a = product("Alpha", 0.0, 0);
        let b = product("Beta", 0.0, 0);
        let sort = SortConfig::default();
        assert_eq!(sort.ordering(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_category_parse_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("Toys"), None);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut product = product("Widget", 5.0, 3);
        let patch = ProductPatch {
            price: Some(7.5),
            ..Default::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 7.5);
        assert_eq!(product.stock, 3);
    }
}
