//! HTTP Layer - RESTful API
//!
//! Controller / Mapper / DTO 以及 axum 路由装配

pub mod controllers;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
