use axum::{extract::State, Json};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::{FilterParameters, RentalSearch, RentalSearchResult};

/// POST /filtered - Available cars for a date window, priced for the whole window
pub async fn search(
    State(state): State<AppState>,
    Json(search): Json<RentalSearch>,
) -> ApiResult<Vec<RentalSearchResult>> {
    let results = state.search_service().search(&search).await?;
    Ok(ApiResponse::success(results))
}

/// GET /filtered/parameters - Distinct values for every search filter
pub async fn parameters(State(state): State<AppState>) -> ApiResult<FilterParameters> {
    let parameters = state.search_service().filter_parameters().await?;
    Ok(ApiResponse::success(parameters))
}
