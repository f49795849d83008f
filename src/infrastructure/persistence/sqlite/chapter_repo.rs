//! SQLite Chapter Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_insert_error, DbPool};
use crate::application::ports::{ChapterRepositoryPort, RepositoryError};
use crate::domain::Chapter;

/// SQLite Chapter Repository
pub struct SqliteChapterRepository {
    pool: DbPool,
}

impl SqliteChapterRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ChapterRow {
    id: i64,
    act: i64,
    scene: i64,
    description: String,
    work_id: i64,
}

fn narrow(value: i64) -> Result<i32, RepositoryError> {
    i32::try_from(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = RepositoryError;

    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        Ok(Chapter {
            id: narrow(row.id)?,
            act: narrow(row.act)?,
            scene: narrow(row.scene)?,
            description: row.description,
            work_id: narrow(row.work_id)?,
        })
    }
}

#[async_trait]
impl ChapterRepositoryPort for SqliteChapterRepository {
    async fn find_all(&self) -> Result<Vec<Chapter>, RepositoryError> {
        let rows: Vec<ChapterRow> = sqlx::query_as(
            "SELECT id, act, scene, description, work_id FROM chapters ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Chapter::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Chapter>, RepositoryError> {
        let row: Option<ChapterRow> = sqlx::query_as(
            "SELECT id, act, scene, description, work_id FROM chapters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Chapter::try_from).transpose()
    }

    async fn insert(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError> {
        if chapter.has_id() {
            sqlx::query(
                r#"
                INSERT INTO chapters (id, act, scene, description, work_id)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(chapter.id)
            .bind(chapter.act)
            .bind(chapter.scene)
            .bind(&chapter.description)
            .bind(chapter.work_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "chapter", chapter.id))?;

            return Ok(chapter.clone());
        }

        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO chapters (id, act, scene, description, work_id)
            SELECT next_id, ?, ?, ?, ?
            FROM (SELECT COALESCE(MAX(id), 0) + 1 AS next_id FROM chapters)
            WHERE next_id <= 2147483647
            RETURNING id
            "#,
        )
        .bind(chapter.act)
        .bind(chapter.scene)
        .bind(&chapter.description)
        .bind(chapter.work_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "chapter", 0))?;

        let id = id.ok_or(RepositoryError::IdExhausted)?;
        Ok(chapter.clone().with_id(id))
    }

    async fn update(&self, chapter: &Chapter) -> Result<Chapter, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE chapters
            SET act = ?, scene = ?, description = ?, work_id = ?
            WHERE id = ?
            "#,
        )
        .bind(chapter.act)
        .bind(chapter.scene)
        .bind(&chapter.description)
        .bind(chapter.work_id)
        .bind(chapter.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("chapter {}", chapter.id)));
        }

        Ok(chapter.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("chapter {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteChapterRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteChapterRepository::new(pool)
    }

    #[tokio::test]
    async fn test_chapter_lifecycle_through_sqlite() {
        let repo = repo().await;

        let saved = repo
            .insert(&Chapter::new(0, 3, 1, "A room in the castle", 7))
            .await
            .unwrap();
        assert!(saved.has_id());

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found, saved);

        let moved = Chapter::new(saved.id, 3, 2, "A hall in the castle", 7);
        repo.update(&moved).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap(), vec![moved]);

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generated_id_after_max_leaves_table_readable() {
        let repo = repo().await;
        repo.insert(&Chapter::new(i32::MAX, 5, 2, "Finale", 1)).await.unwrap();

        let result = repo.insert(&Chapter::new(0, 5, 3, "Overflow", 1)).await;
        assert!(matches!(result, Err(RepositoryError::IdExhausted)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_and_missing() {
        let repo = repo().await;
        repo.insert(&Chapter::new(2, 1, 1, "First", 1)).await.unwrap();

        let result = repo.insert(&Chapter::new(2, 4, 4, "Second", 1)).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));

        let result = repo.update(&Chapter::new(3, 1, 1, "Ghost", 1)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
