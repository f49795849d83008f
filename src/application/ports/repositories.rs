//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Chapter, Character};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Id sequence exhausted")]
    IdExhausted,
}

// ============================================================================
// Character Repository
// ============================================================================

/// Character Repository Port
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// 获取所有角色（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError>;

    /// 根据 ID 查找角色
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, RepositoryError>;

    /// 插入新角色
    ///
    /// `id == 0` 时由存储层分配 id，返回值携带分配后的 id
    ///
    /// # Errors
    /// - `RepositoryError::Duplicate` - id 已被占用
    /// - `RepositoryError::IdExhausted` - 已无可分配的 id
    async fn insert(&self, character: &Character) -> Result<Character, RepositoryError>;

    /// 覆盖已有角色的全部字段
    ///
    /// # Errors
    /// - `RepositoryError::NotFound` - id 不存在
    async fn update(&self, character: &Character) -> Result<Character, RepositoryError>;

    /// 删除角色
    ///
    /// # Errors
    /// - `RepositoryError::NotFound` - id 不存在
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

// ============================================================================
// Chapter Repository
// ============================================================================

/// Chapter Repository Port
///
/// 与 `CharacterRepositoryPort` 语义一致
#[async_trait]
pub trait ChapterRepositoryPort: Send + Sync {
    /// 获取所有章节（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Chapter>, RepositoryError>;

    /// 根据 ID 查找章节
    async fn find_by_id(&self, id: i32) -> Result<Option<Chapter>, RepositoryError>;

    /// 插入新章节，`id == 0` 时由存储层分配 id
    async fn insert(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError>;

    /// 覆盖已有章节
    async fn update(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError>;

    /// 删除章节
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
