//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 请求体大小上限（字节）
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn build_router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600));

        create_routes()
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::memory::{InMemoryChapterRepository, InMemoryCharacterRepository};

    fn server(max_body_bytes: usize) -> HttpServer {
        let state = AppState::new(
            InMemoryCharacterRepository::new().arc(),
            InMemoryChapterRepository::new().arc(),
        );
        HttpServer::new(
            ServerConfig::new("127.0.0.1", 8080).with_max_body_bytes(max_body_bytes),
            state,
        )
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::new("127.0.0.1", 9000).addr(), "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let body = format!(
            r#"{{"charName":"{}","abbreviation":"X","description":""}}"#,
            "x".repeat(256)
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/characters")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = server(64).build_router().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
        assert_ne!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_run_with_shutdown_stops_on_signal() {
        let state = AppState::new(
            InMemoryCharacterRepository::new().arc(),
            InMemoryChapterRepository::new().arc(),
        );
        let server = HttpServer::new(ServerConfig::new("127.0.0.1", 0), state);

        let result = server.run_with_shutdown(async {}).await;
        assert!(result.is_ok());
    }
}
