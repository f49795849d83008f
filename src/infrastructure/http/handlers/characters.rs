//! Character HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::infrastructure::http::dto::{CharactersDto, IdQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取角色列表
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CharactersDto>>, ApiError> {
    let characters = state.characters.read_all().await?;
    Ok(Json(characters))
}

/// 获取角色详情
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<CharactersDto>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.characters.read_by_id(id).await?))
}

/// 创建角色
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CharactersDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CharactersDto>), ApiError> {
    let Json(dto) = payload?;
    let created = state.characters.create(dto).await?;

    tracing::info!(character_id = created.id, "Character created via API");

    Ok((StatusCode::CREATED, Json(created)))
}

/// 修改角色
pub async fn modify_character(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CharactersDto>, JsonRejection>,
) -> Result<Json<CharactersDto>, ApiError> {
    let Json(dto) = payload?;
    Ok(Json(state.characters.modify(dto).await?))
}

/// 删除角色（`?id=N`）
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(IdQuery { id }) = query?;
    state.characters.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 删除角色（`/characters/{id}`）
pub async fn delete_character_by_path(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.characters.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
