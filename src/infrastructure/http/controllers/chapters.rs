//! Chapters Controller

use std::sync::Arc;

use crate::application::ports::ChapterManagerPort;
use crate::domain::{Chapter, ChapterError};
use crate::infrastructure::http::dto::ChaptersDto;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::mapper::DtoMapper;

/// 章节 Controller
pub struct ChaptersController {
    manager: Arc<dyn ChapterManagerPort>,
    mapper: Arc<dyn DtoMapper<ChaptersDto, Chapter>>,
}

impl ChaptersController {
    pub fn new(
        manager: Arc<dyn ChapterManagerPort>,
        mapper: Arc<dyn DtoMapper<ChaptersDto, Chapter>>,
    ) -> Self {
        Self { manager, mapper }
    }

    pub async fn read_all(&self) -> Result<Vec<ChaptersDto>, ApiError> {
        let chapters = self.manager.read_all().await?;
        Ok(chapters.into_iter().map(|c| self.mapper.to_dto(c)).collect())
    }

    pub async fn read_by_id(&self, id: i32) -> Result<ChaptersDto, ApiError> {
        let chapter = self.manager.read_by_id(id).await?;
        Ok(self.mapper.to_dto(chapter))
    }

    pub async fn create(&self, dto: ChaptersDto) -> Result<ChaptersDto, ApiError> {
        let chapter = self.mapper.to_domain(dto);
        match self.manager.record(chapter).await {
            Ok(saved) => Ok(self.mapper.to_dto(saved)),
            Err(ChapterError::AlreadyExists(id)) => {
                Err(ApiError::Conflict(format!("Chapter already exists: {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn modify(&self, dto: ChaptersDto) -> Result<ChaptersDto, ApiError> {
        let chapter = self.mapper.to_domain(dto);
        match self.manager.modify(chapter).await {
            Ok(saved) => Ok(self.mapper.to_dto(saved)),
            Err(ChapterError::NotFound(id)) => {
                Err(ApiError::NotFound(format!("Chapter not found: {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 先读取再删除，任一步骤不存在都返回 404
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let result = match self.manager.read_by_id(id).await {
            Ok(chapter) => self.manager.delete(chapter).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(()),
            Err(ChapterError::NotFound(id)) => {
                Err(ApiError::NotFound(format!("Chapter not found: {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
