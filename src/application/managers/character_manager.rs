//! Character Manager

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{CharacterManagerPort, CharacterRepositoryPort, RepositoryError};
use crate::domain::{Character, CharacterError};

/// 角色服务
///
/// 所有操作直接映射到一次仓储调用，不做缓存
pub struct CharacterManager {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl CharacterManager {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }
}

#[async_trait]
impl CharacterManagerPort for CharacterManager {
    async fn read_all(&self) -> Result<Vec<Character>, CharacterError> {
        Ok(self.character_repo.find_all().await?)
    }

    async fn read_by_id(&self, id: i32) -> Result<Character, CharacterError> {
        self.character_repo
            .find_by_id(id)
            .await?
            .ok_or(CharacterError::NotFound(id))
    }

    async fn record(&self, character: Character) -> Result<Character, CharacterError> {
        // id 为 0 表示由存储层分配
        let saved = match self.character_repo.insert(&character).await {
            Ok(saved) => saved,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(CharacterError::AlreadyExists(character.id));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            character_id = saved.id,
            char_name = %saved.char_name,
            "Character recorded"
        );

        Ok(saved)
    }

    async fn modify(&self, character: Character) -> Result<Character, CharacterError> {
        let saved = match self.character_repo.update(&character).await {
            Ok(saved) => saved,
            Err(RepositoryError::NotFound(_)) => {
                return Err(CharacterError::NotFound(character.id));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(character_id = saved.id, "Character modified");

        Ok(saved)
    }

    async fn delete(&self, character: Character) -> Result<(), CharacterError> {
        match self.character_repo.delete(character.id).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => {
                return Err(CharacterError::NotFound(character.id));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            character_id = character.id,
            char_name = %character.char_name,
            "Character deleted"
        );

        Ok(())
    }
}
