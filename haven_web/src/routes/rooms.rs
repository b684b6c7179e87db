use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use haven::domain::core::{CategoryFilter, Room, RoomId, SearchCriteria};

use super::{AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct RoomsQuery {
    q: Option<String>,
    category: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomListPage {
    found: usize,
    rooms: Vec<Room>,
}

/// `GET /rooms` — the room search. Malformed or absent bounds fall back to
/// the catalog-wide defaults before the filter runs.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RoomsQuery>,
) -> Json<RoomListPage> {
    let (min_default, max_default) = state.catalog.price_bounds();
    let category = params
        .category
        .and_then(|s| s.parse::<CategoryFilter>().ok())
        .unwrap_or_default();
    let min_price = params
        .min_price
        .and_then(|s| s.parse().ok())
        .unwrap_or(min_default);
    let max_price = params
        .max_price
        .and_then(|s| s.parse().ok())
        .unwrap_or(max_default);
    let criteria = SearchCriteria::new(
        params.q.unwrap_or_default(),
        category,
        min_price,
        max_price,
    );
    let rooms = state.catalog.search(&criteria);
    info!(
        "room search matched {} of {} rooms",
        rooms.len(),
        state.catalog.rooms().len()
    );
    Json(RoomListPage {
        found: rooms.len(),
        rooms: rooms.into_iter().cloned().collect(),
    })
}

/// `GET /rooms/:id` — an unknown id is a not-found condition, not a
/// fallback to a default record.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Room>, AppError> {
    let id = RoomId::from(id);
    match state.catalog.get(id) {
        Some(room) => Ok(Json(room.clone())),
        None => Err(AppError::NotFound(format!("no room with id {}", id))),
    }
}
