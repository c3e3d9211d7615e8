use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    db,
    error::AppResult,
    models::{Product, ProductPayload},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let products = db::fetch_all_products(&state.db).await?;

    info!(count = products.len(), "Listed products");

    Ok((StatusCode::OK, Json(products)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = db::fetch_product_by_id(&state.db, id).await?;

    info!(id, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let fields = payload.validate()?;
    let id = db::insert_product(&state.db, &fields).await?;

    info!(id, name = %fields.name, "Created product");

    Ok((
        StatusCode::OK,
        Json(json!({ "id": id, "message": "Product created successfully" })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let fields = payload.validate()?;
    db::update_product(&state.db, id, &fields).await?;

    info!(id, "Updated product");

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product updated successfully" })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    db::delete_product(&state.db, id).await?;

    info!(id, "Deleted product");

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product deleted successfully" })),
    ))
}
