//! Product report handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use super::AppState;
use crate::domain::models::{ProductReport, ReportFilter, ReportPage, ReportSort};

/// Raw query-parameter bag for the report endpoint. Every field arrives
/// as an optional string so malformed values degrade to "no constraint"
/// or the default instead of rejecting the request.
#[derive(Debug, Deserialize, Default)]
pub struct ReportParams {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_stock: Option<String>,
    pub max_stock: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub parallel: Option<String>,
}

impl ReportParams {
    pub fn into_parts(self) -> (ReportFilter, ReportSort, ReportPage, bool) {
        let filter = ReportFilter {
            name: self.name.filter(|n| !n.is_empty()),
            category_id: self.category_id.as_deref().and_then(|v| v.parse().ok()),
            min_price: self.min_price.as_deref().and_then(|v| v.parse().ok()),
            max_price: self.max_price.as_deref().and_then(|v| v.parse().ok()),
            min_stock: self.min_stock.as_deref().and_then(|v| v.parse().ok()),
            max_stock: self.max_stock.as_deref().and_then(|v| v.parse().ok()),
        };
        let sort = ReportSort::from_params(
            self.sort_by.as_deref().unwrap_or("name"),
            self.sort_order.as_deref().unwrap_or("asc"),
        );
        let page = ReportPage::from_raw(self.page.as_deref(), self.page_size.as_deref());
        let parallel = self.parallel.as_deref() == Some("true");

        (filter, sort, page, parallel)
    }
}

pub async fn product_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ProductReport>, ApiError> {
    let (filter, sort, page, parallel) = params.into_parts();
    let report = state
        .reports
        .generate_report(&filter, &sort, page, parallel)
        .await?;
    Ok(Json(report))
}
