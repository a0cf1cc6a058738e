//! Report domain model: filter, sort and page descriptors plus the
//! aggregate report they produce.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Optional filter fields for the product report. Every present field
/// contributes one AND-ed predicate; an absent field is no constraint.
/// Range bounds are inclusive and may be supplied independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_stock: Option<i64>,
    pub max_stock: Option<i64>,
}

/// Columns the report may be sorted by. Anything outside this list is
/// rejected silently and the store's default ordering applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    CategoryId,
    Price,
    StockQuantity,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CategoryId => "category_id",
            Self::Price => "price",
            Self::StockQuantity => "stock_quantity",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "category_id" => Some(Self::CategoryId),
            "price" => Some(Self::Price),
            "stock_quantity" => Some(Self::StockQuantity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Unknown direction strings fall back to ascending rather than being
    /// forwarded into the query verbatim.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Sort descriptor. `column: None` means no explicit ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSort {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl ReportSort {
    pub fn from_params(sort_by: &str, sort_order: &str) -> Self {
        Self {
            column: SortColumn::from_str(sort_by),
            direction: SortDirection::parse(sort_order),
        }
    }
}

/// 1-based page coordinates with defaulting, lenient parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPage {
    pub page: i64,
    pub page_size: i64,
}

impl Default for ReportPage {
    fn default() -> Self {
        Self { page: 1, page_size: 10 }
    }
}

impl ReportPage {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Parse raw query-parameter values; missing or non-numeric input
    /// falls back to the defaults (page 1, size 10).
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let defaults = Self::default();
        Self::new(
            page.and_then(|p| p.parse().ok()).unwrap_or(defaults.page),
            page_size
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.page_size),
        )
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

/// Aggregate product report. The numeric aggregates are always present:
/// zero when nothing matches, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    pub total_products: i64,
    pub total_stock: i64,
    pub avg_price: f64,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_allow_list() {
        assert_eq!(SortColumn::from_str("price"), Some(SortColumn::Price));
        assert_eq!(SortColumn::from_str("stock_quantity"), Some(SortColumn::StockQuantity));
        assert_eq!(SortColumn::from_str("__nonexistent__"), None);
        assert_eq!(SortColumn::from_str(""), None);
        // Not in the allow-list even though it is a real column
        assert_eq!(SortColumn::from_str("description"), None);
    }

    #[test]
    fn test_sort_direction_fallback() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("ASC"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Ascending);
    }

    #[test]
    fn test_page_defaults_on_garbage() {
        assert_eq!(ReportPage::from_raw(None, None), ReportPage { page: 1, page_size: 10 });
        assert_eq!(
            ReportPage::from_raw(Some("abc"), Some("")),
            ReportPage { page: 1, page_size: 10 }
        );
        assert_eq!(
            ReportPage::from_raw(Some("3"), Some("25")),
            ReportPage { page: 3, page_size: 25 }
        );
    }

    #[test]
    fn test_page_clamped_to_one_based() {
        let page = ReportPage::new(0, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.offset(), 0);
        assert_eq!(ReportPage::new(3, 10).offset(), 20);
    }
}
