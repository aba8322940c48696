//! Match schedule endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use matchcal_core::{ALL_CATEGORIES, MatchRecord, classify, export};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/matches", get(list_matches))
        .route("/api/matches/{id}/export", get(export_links))
        .route("/api/matches/{id}/calendar.ics", get(export_ics))
}

/// Category filter; "all" (the default) keeps everything
#[derive(Deserialize)]
struct ListParams {
    #[serde(default = "all_categories")]
    category: String,
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}

/// Response of GET /api/matches
#[derive(Serialize)]
struct MatchesResponse {
    matches: Vec<MatchRecord>,
    total: usize,
}

/// GET /api/matches - the filtered schedule in display order: upcoming
/// matches soonest-first, then finished matches, then entries whose
/// date is still unresolved
async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<MatchesResponse>, AppError> {
    let all = state.matches().await?;
    let matches = classify::order_for_display(&all, &params.category, Local::now().naive_local());
    let total = matches.len();
    Ok(Json(MatchesResponse { matches, total }))
}

async fn find_match(state: &AppState, id: u32) -> Result<MatchRecord, AppError> {
    let matches = state.matches().await?;
    matches
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Match not found: {id}")))
}

/// GET /api/matches/:id/export - calendar deep links for one match
async fn export_links(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<export::CalendarLinks>, AppError> {
    let record = find_match(&state, id).await?;
    let links = export::event_links(&record)
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Cannot export match {id}: {e}")))?;
    Ok(Json(links))
}

/// GET /api/matches/:id/calendar.ics - downloadable event file
async fn export_ics(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let record = find_match(&state, id).await?;
    let ics = export::event_ics(&record)
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Cannot export match {id}: {e}")))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/calendar; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"match-{id}.ics\""),
        ),
    ];
    Ok((StatusCode::OK, headers, ics))
}
