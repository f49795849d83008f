//! Chapter Manager Port

use async_trait::async_trait;

use crate::domain::{Chapter, ChapterError};

/// Chapter Manager Port
///
/// 与 `CharacterManagerPort` 语义一致：
/// 不存在返回 `ChapterError::NotFound`，重复创建返回 `ChapterError::AlreadyExists`
#[async_trait]
pub trait ChapterManagerPort: Send + Sync {
    async fn read_all(&self) -> Result<Vec<Chapter>, ChapterError>;

    async fn read_by_id(&self, id: i32) -> Result<Chapter, ChapterError>;

    async fn record(&self, chapter: Chapter) -> Result<Chapter, ChapterError>;

    async fn modify(&self, chapter: Chapter) -> Result<Chapter, ChapterError>;

    async fn delete(&self, chapter: Chapter) -> Result<(), ChapterError>;
}
