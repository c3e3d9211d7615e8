use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{db, error::AppResult, models::Stats, AppState};

pub async fn get_stats(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Stats>)> {
    let stats = db::fetch_stats(&state.db).await?;

    info!(
        total_products = stats.total_products,
        categories = stats.categories,
        "Computed stats"
    );

    Ok((StatusCode::OK, Json(stats)))
}
