//! Characters Controller

use std::sync::Arc;

use crate::application::ports::CharacterManagerPort;
use crate::domain::{Character, CharacterError};
use crate::infrastructure::http::dto::CharactersDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::mapper::DtoMapper;

/// 角色 Controller
pub struct CharactersController {
    manager: Arc<dyn CharacterManagerPort>,
    mapper: Arc<dyn DtoMapper<CharactersDto, Character>>,
}

impl CharactersController {
    pub fn new(
        manager: Arc<dyn CharacterManagerPort>,
        mapper: Arc<dyn DtoMapper<CharactersDto, Character>>,
    ) -> Self {
        Self { manager, mapper }
    }

    /// 读取全部角色
    pub async fn read_all(&self) -> Result<Vec<CharactersDto>, ApiError> {
        let characters = self.manager.read_all().await?;
        Ok(characters
            .into_iter()
            .map(|c| self.mapper.to_dto(c))
            .collect())
    }

    /// 按 id 读取角色，不存在时返回 404
    pub async fn read_by_id(&self, id: i32) -> Result<CharactersDto, ApiError> {
        let character = self.manager.read_by_id(id).await?;
        Ok(self.mapper.to_dto(character))
    }

    /// 创建角色，id 冲突时返回 409
    pub async fn create(&self, dto: CharactersDto) -> Result<CharactersDto, ApiError> {
        let character = self.mapper.to_domain(dto);
        match self.manager.record(character).await {
            Ok(saved) => Ok(self.mapper.to_dto(saved)),
            Err(CharacterError::AlreadyExists(id)) => Err(ApiError::Conflict(format!(
                "Character already exists: {}",
                id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// 修改角色，不存在时返回 404
    pub async fn modify(&self, dto: CharactersDto) -> Result<CharactersDto, ApiError> {
        let character = self.mapper.to_domain(dto);
        match self.manager.modify(character).await {
            Ok(saved) => Ok(self.mapper.to_dto(saved)),
            Err(CharacterError::NotFound(id)) => {
                Err(ApiError::NotFound(format!("Character not found: {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 删除角色：先读取再删除，任一步骤不存在都返回 404
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = match self.manager.read_by_id(id).await {
            Ok(character) => self.manager.delete(character).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(()),
            Err(CharacterError::NotFound(id)) => {
                Err(ApiError::NotFound(format!("Character not found: {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
