//! In-Memory Chapter Repository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::application::ports::{ChapterRepositoryPort, RepositoryError};
use crate::domain::Chapter;

/// 内存章节仓储
pub struct InMemoryChapterRepository {
    chapters: DashMap<i32, Chapter>,
    sequence: AtomicI32,
}

impl InMemoryChapterRepository {
    pub fn new() -> Self {
        Self {
            chapters: DashMap::new(),
            sequence: AtomicI32::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    fn next_id(&self) -> Result<i32, RepositoryError> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(|previous| previous + 1)
            .map_err(|_| RepositoryError::IdExhausted)
    }
}

impl Default for InMemoryChapterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChapterRepositoryPort for InMemoryChapterRepository {
    async fn find_all(&self) -> Result<Vec<Chapter>, RepositoryError> {
        let mut chapters: Vec<Chapter> = self.chapters.iter().map(|e| e.value().clone()).collect();
        chapters.sort_by_key(|c| c.id);
        Ok(chapters)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Chapter>, RepositoryError> {
        Ok(self.chapters.get(&id).map(|c| c.clone()))
    }

    async fn insert(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError> {
        let saved = if chapter.has_id() {
            self.sequence.fetch_max(chapter.id, Ordering::SeqCst);
            chapter.clone()
        } else {
            chapter.clone().with_id(self.next_id()?)
        };

        match self.chapters.entry(saved.id) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!("chapter {}", saved.id))),
            Entry::Vacant(slot) => {
                slot.insert(saved.clone());
                tracing::debug!(chapter_id = saved.id, "Chapter stored in memory");
                Ok(saved)
            }
        }
    }

    async fn update(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError> {
        let mut stored = self
            .chapters
            .get_mut(&chapter.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("chapter {}", chapter.id)))?;
        *stored = chapter.clone();
        Ok(chapter.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.chapters
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("chapter {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chapter_store() {
        let repo = InMemoryChapterRepository::new();

        let first = repo.insert(&Chapter::new(0, 1, 1, "Opening", 1)).await.unwrap();
        let second = repo.insert(&Chapter::new(0, 1, 2, "Court", 1)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first.clone(), second]);

        repo.delete(first.id).await.unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_near_max() {
        let repo = InMemoryChapterRepository::new();
        repo.insert(&Chapter::new(i32::MAX - 1, 1, 1, "Penultimate", 1))
            .await
            .unwrap();

        let last = repo.insert(&Chapter::new(0, 1, 2, "Last", 1)).await.unwrap();
        assert_eq!(last.id, i32::MAX);

        let result = repo.insert(&Chapter::new(0, 1, 3, "Overflow", 1)).await;
        assert!(matches!(result, Err(RepositoryError::IdExhausted)));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_and_missing() {
        let repo = InMemoryChapterRepository::new();
        repo.insert(&Chapter::new(2, 1, 1, "First", 1)).await.unwrap();

        let result = repo.insert(&Chapter::new(2, 4, 4, "Second", 1)).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));

        let result = repo.update(&Chapter::new(3, 1, 1, "Ghost", 1)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert_eq!(repo.len(), 1);
    }
}
