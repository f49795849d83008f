//! Memory Layer - In-Memory Repositories
//!
//! 基于 DashMap 的仓储实现，用于无数据库部署和测试

mod chapter_repo;
mod character_repo;

pub use chapter_repo::InMemoryChapterRepository;
pub use character_repo::InMemoryCharacterRepository;
