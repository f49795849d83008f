//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET     健康检查
//! - /api/characters           GET     列出所有角色
//! - /api/characters           POST    创建角色
//! - /api/characters           PUT     修改角色
//! - /api/characters?id={id}   DELETE  删除角色
//! - /api/characters/{id}      GET     获取角色详情
//! - /api/characters/{id}      DELETE  删除角色
//! - /api/chapters...                  同上，章节

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(character_routes())
        .merge(chapter_routes())
}

/// Character 路由
fn character_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/characters",
            post(handlers::create_character)
                .get(handlers::list_characters)
                .put(handlers::modify_character)
                .delete(handlers::delete_character),
        )
        .route(
            "/characters/:id",
            get(handlers::get_character).delete(handlers::delete_character_by_path),
        )
}

/// Chapter 路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/chapters",
            post(handlers::create_chapter)
                .get(handlers::list_chapters)
                .put(handlers::modify_chapter)
                .delete(handlers::delete_chapter),
        )
        .route(
            "/chapters/:id",
            get(handlers::get_chapter).delete(handlers::delete_chapter_by_path),
        )
}
