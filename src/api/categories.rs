//! Category CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::domain::models::Category;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<CategoryRequest> for Category {
    fn from(request: CategoryRequest) -> Self {
        Category::new(request.name, request.description)
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.categories.create_category(request.into()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list_categories().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get_category(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.update_category(id, request.into()).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.categories.delete_category(id).await?;
    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
