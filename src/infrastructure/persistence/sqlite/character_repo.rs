//! SQLite Character Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_insert_error, DbPool};
use crate::application::ports::{CharacterRepositoryPort, RepositoryError};
use crate::domain::Character;

/// SQLite Character Repository
pub struct SqliteCharacterRepository {
    pool: DbPool,
}

impl SqliteCharacterRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CharacterRow {
    id: i64,
    char_name: String,
    abbreviation: String,
    description: String,
}

impl TryFrom<CharacterRow> for Character {
    type Error = RepositoryError;

    fn try_from(row: CharacterRow) -> Result<Self, Self::Error> {
        Ok(Character {
            id: i32::try_from(row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            char_name: row.char_name,
            abbreviation: row.abbreviation,
            description: row.description,
        })
    }
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError> {
        let rows: Vec<CharacterRow> = sqlx::query_as(
            "SELECT id, char_name, abbreviation, description FROM characters ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Character::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, RepositoryError> {
        let row: Option<CharacterRow> = sqlx::query_as(
            "SELECT id, char_name, abbreviation, description FROM characters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Character::try_from).transpose()
    }

    async fn insert(&self, character: &Character) -> Result<Character, RepositoryError> {
        if character.has_id() {
            sqlx::query(
                r#"
                INSERT INTO characters (id, char_name, abbreviation, description)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(character.id)
            .bind(&character.char_name)
            .bind(&character.abbreviation)
            .bind(&character.description)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "character", character.id))?;

            return Ok(character.clone());
        }

        // 单条语句内分配 id，超出 i32 范围时不写入任何行
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO characters (id, char_name, abbreviation, description)
            SELECT next_id, ?, ?, ?
            FROM (SELECT COALESCE(MAX(id), 0) + 1 AS next_id FROM characters)
            WHERE next_id <= 2147483647
            RETURNING id
            "#,
        )
        .bind(&character.char_name)
        .bind(&character.abbreviation)
        .bind(&character.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "character", 0))?;

        let id = id.ok_or(RepositoryError::IdExhausted)?;
        Ok(character.clone().with_id(id))
    }

    async fn update(&self, character: &Character) -> Result<Character, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE characters
            SET char_name = ?, abbreviation = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&character.char_name)
        .bind(&character.abbreviation)
        .bind(&character.description)
        .bind(character.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("character {}", character.id)));
        }

        Ok(character.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("character {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteCharacterRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteCharacterRepository::new(pool)
    }

    #[tokio::test]
    async fn test_insert_with_explicit_id() {
        let repo = repo().await;
        let johnny = Character::new(
            1,
            "Johnny Test",
            "Johnny",
            "A good test subject is hard to find",
        );

        let saved = repo.insert(&johnny).await.unwrap();
        assert_eq!(saved, johnny);

        let found = repo.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(johnny));
    }

    #[tokio::test]
    async fn test_insert_generates_id() {
        let repo = repo().await;

        let first = repo.insert(&Character::new(0, "Hamlet", "HAM", "")).await.unwrap();
        let second = repo.insert(&Character::new(0, "Ophelia", "OPH", "")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_duplicate_keeps_first() {
        let repo = repo().await;
        repo.insert(&Character::new(1, "First", "F", "")).await.unwrap();

        let result = repo.insert(&Character::new(1, "Second", "S", "")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().char_name, "First");
    }

    #[tokio::test]
    async fn test_generated_id_after_max_leaves_table_readable() {
        let repo = repo().await;
        repo.insert(&Character::new(i32::MAX, "Last", "L", "")).await.unwrap();

        let result = repo.insert(&Character::new(0, "Overflow", "O", "")).await;
        assert!(matches!(result, Err(RepositoryError::IdExhausted)));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, i32::MAX);
    }

    #[tokio::test]
    async fn test_generated_id_reaches_max() {
        let repo = repo().await;
        repo.insert(&Character::new(i32::MAX - 1, "Penultimate", "P", ""))
            .await
            .unwrap();

        let last = repo.insert(&Character::new(0, "Last", "L", "")).await.unwrap();
        assert_eq!(last.id, i32::MAX);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = repo().await;
        repo.insert(&Character::new(4, "Gertrude", "GER", "Queen")).await.unwrap();
        repo.update(&Character::new(4, "Gertrude", "GER", "Queen of Denmark"))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "Queen of Denmark");

        repo.delete(4).await.unwrap();
        assert!(repo.find_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let repo = repo().await;

        let result = repo.update(&Character::new(9, "Ghost", "G", "")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(matches!(repo.delete(9).await, Err(RepositoryError::NotFound(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
