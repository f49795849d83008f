//! Chapter HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::infrastructure::http::dto::{ChaptersDto, IdQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取章节列表
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChaptersDto>>, ApiError> {
    Ok(Json(state.chapters.read_all().await?))
}

/// 获取章节详情
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ChaptersDto>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.chapters.read_by_id(id).await?))
}

/// 创建章节
pub async fn create_chapter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChaptersDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ChaptersDto>), ApiError> {
    let Json(dto) = payload?;
    let created = state.chapters.create(dto).await?;

    tracing::info!(
        chapter_id = created.id,
        work_id = created.work_id,
        "Chapter created via API"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// 修改章节
pub async fn modify_chapter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChaptersDto>, JsonRejection>,
) -> Result<Json<ChaptersDto>, ApiError> {
    let Json(dto) = payload?;
    Ok(Json(state.chapters.modify(dto).await?))
}

/// 删除章节（`?id=N`）
pub async fn delete_chapter(
    State(state): State<Arc<AppState>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(IdQuery { id }) = query?;
    state.chapters.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 删除章节（`/chapters/{id}`）
pub async fn delete_chapter_by_path(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.chapters.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
