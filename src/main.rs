//! tzs - 剧作角色与章节管理服务

use std::sync::Arc;

use tzs::application::{ChapterRepositoryPort, CharacterRepositoryPort};
use tzs::config::{load_config, print_config, AppConfig, StorageBackend};
use tzs::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tzs::infrastructure::memory::{InMemoryChapterRepository, InMemoryCharacterRepository};
use tzs::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteChapterRepository,
    SqliteCharacterRepository,
};

/// 初始化日志
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},tzs={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

/// 根据配置创建仓储
async fn build_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn CharacterRepositoryPort>, Arc<dyn ChapterRepositoryPort>)> {
    match config.database.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let character_repo: Arc<dyn CharacterRepositoryPort> =
                Arc::new(SqliteCharacterRepository::new(pool.clone()));
            let chapter_repo: Arc<dyn ChapterRepositoryPort> =
                Arc::new(SqliteChapterRepository::new(pool));
            Ok((character_repo, chapter_repo))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on shutdown");
            let character_repo: Arc<dyn CharacterRepositoryPort> =
                Arc::new(InMemoryCharacterRepository::new());
            let chapter_repo: Arc<dyn ChapterRepositoryPort> =
                Arc::new(InMemoryChapterRepository::new());
            Ok((character_repo, chapter_repo))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    let (character_repo, chapter_repo) = build_repositories(&config).await?;
    let state = AppState::new(character_repo, chapter_repo);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
