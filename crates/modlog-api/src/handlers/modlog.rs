//! Moderation log handlers

use axum::{
    extract::{Path, State},
    Json,
};
use modlog_service::{LogPageResponse, ModLogService};

use crate::extractors::{LogPagePath, SubPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the first page of a sub's moderation log
///
/// GET /s/{sub}/log
pub async fn get_first_page(
    State(state): State<AppState>,
    Path(SubPath { sub }): Path<SubPath>,
) -> ApiResult<Json<LogPageResponse>> {
    let service = ModLogService::new(state.service_context());
    let response = service.get_log_page(&sub, 1).await?;
    Ok(Json(response))
}

/// Get one page of a sub's moderation log
///
/// GET /s/{sub}/log/{page}
pub async fn get_page(
    State(state): State<AppState>,
    path: LogPagePath,
) -> ApiResult<Json<LogPageResponse>> {
    let service = ModLogService::new(state.service_context());
    let response = service.get_log_page(&path.sub, path.page).await?;
    Ok(Json(response))
}
