//! Product CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::domain::models::{Product, ProductPage, ProductPatch, ReportPage};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Raw pagination parameters; anything unparseable falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    pub fn to_page(&self) -> ReportPage {
        ReportPage::from_raw(self.page.as_deref(), self.page_size.as_deref())
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state
        .products
        .create_product(Product::new(
            request.name,
            request.description,
            request.price,
            request.category_id,
            request.stock_quantity,
            request.is_active,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ProductPage>, ApiError> {
    let page = state.products.list_products(params.to_page()).await?;
    Ok(Json(page))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.get_product(id).await?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let product = state.products.update_product(id, patch).await?;
    Ok(Json(product))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.products.delete_product(id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
