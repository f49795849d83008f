//! Chapter Manager

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{ChapterManagerPort, ChapterRepositoryPort, RepositoryError};
use crate::domain::{Chapter, ChapterError};

/// 章节服务
pub struct ChapterManager {
    chapter_repo: Arc<dyn ChapterRepositoryPort>,
}

impl ChapterManager {
    pub fn new(chapter_repo: Arc<dyn ChapterRepositoryPort>) -> Self {
        Self { chapter_repo }
    }
}

#[async_trait]
impl ChapterManagerPort for ChapterManager {
    async fn read_all(&self) -> Result<Vec<Chapter>, ChapterError> {
        Ok(self.chapter_repo.find_all().await?)
    }

    async fn read_by_id(&self, id: i32) -> Result<Chapter, ChapterError> {
        self.chapter_repo
            .find_by_id(id)
            .await?
            .ok_or(ChapterError::NotFound(id))
    }

    async fn record(&self, chapter: Chapter) -> Result<Chapter, ChapterError> {
        let saved = match self.chapter_repo.insert(&chapter).await {
            Ok(saved) => saved,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(ChapterError::AlreadyExists(chapter.id));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            chapter_id = saved.id,
            work_id = saved.work_id,
            position = %saved.position(),
            "Chapter recorded"
        );

        Ok(saved)
    }

    async fn modify(&self, chapter: Chapter) -> Result<Chapter, ChapterError> {
        let saved = match self.chapter_repo.update(&chapter).await {
            Ok(saved) => saved,
            Err(RepositoryError::NotFound(_)) => return Err(ChapterError::NotFound(chapter.id)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(chapter_id = saved.id, "Chapter modified");

        Ok(saved)
    }

    async fn delete(&self, chapter: Chapter) -> Result<(), ChapterError> {
        match self.chapter_repo.delete(chapter.id).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => return Err(ChapterError::NotFound(chapter.id)),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(chapter_id = chapter.id, "Chapter deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryChapterRepository;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteChapterRepository,
    };

    #[tokio::test]
    async fn test_chapter_lifecycle() {
        let repo = Arc::new(InMemoryChapterRepository::new());
        let manager = ChapterManager::new(repo.clone());

        // Record
        let saved = manager
            .record(Chapter::new(0, 1, 1, "Elsinore, a platform", 1))
            .await
            .unwrap();
        assert!(saved.has_id());

        // Read
        assert_eq!(manager.read_all().await.unwrap().len(), 1);
        assert_eq!(manager.read_by_id(saved.id).await.unwrap(), saved);

        // Modify
        let moved = Chapter::new(saved.id, 1, 2, "A room of state in the castle", 1);
        assert_eq!(manager.modify(moved.clone()).await.unwrap(), moved);

        // Delete
        manager.delete(moved.clone()).await.unwrap();
        assert!(matches!(
            manager.read_by_id(moved.id).await,
            Err(ChapterError::NotFound(_))
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_record_duplicate_id() {
        let repo = Arc::new(InMemoryChapterRepository::new());
        let manager = ChapterManager::new(repo.clone());

        manager.record(Chapter::new(3, 2, 1, "First", 1)).await.unwrap();
        let result = manager.record(Chapter::new(3, 5, 5, "Second", 1)).await;

        assert!(matches!(result, Err(ChapterError::AlreadyExists(3))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_chapter_operations() {
        let repo = Arc::new(InMemoryChapterRepository::new());
        let manager = ChapterManager::new(repo.clone());
        let ghost = Chapter::new(42, 1, 1, "Ghost", 1);

        assert!(matches!(
            manager.modify(ghost.clone()).await,
            Err(ChapterError::NotFound(42))
        ));
        assert!(matches!(
            manager.delete(ghost).await,
            Err(ChapterError::NotFound(42))
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_sqlite_record_duplicate_id() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteChapterRepository::new(pool));
        let manager = ChapterManager::new(repo.clone());

        let first = Chapter::new(3, 2, 1, "First", 1);
        manager.record(first.clone()).await.unwrap();
        let result = manager.record(Chapter::new(3, 5, 5, "Second", 1)).await;

        assert!(matches!(result, Err(ChapterError::AlreadyExists(3))));
        assert_eq!(repo.find_all().await.unwrap(), vec![first]);
    }
}
