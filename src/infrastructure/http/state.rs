//! Application State
//!
//! 显式装配：Repository → Manager → Controller

use std::sync::Arc;

use crate::application::{
    ChapterManager, ChapterRepositoryPort, CharacterManager, CharacterRepositoryPort,
};
use crate::infrastructure::http::controllers::{ChaptersController, CharactersController};
use crate::infrastructure::http::mapper::{ChaptersMapper, CharactersMapper};

/// 应用状态
pub struct AppState {
    pub characters: CharactersController,
    pub chapters: ChaptersController,
}

impl AppState {
    /// 基于仓储创建应用状态
    pub fn new(
        character_repo: Arc<dyn CharacterRepositoryPort>,
        chapter_repo: Arc<dyn ChapterRepositoryPort>,
    ) -> Self {
        Self {
            characters: CharactersController::new(
                Arc::new(CharacterManager::new(character_repo)),
                Arc::new(CharactersMapper),
            ),
            chapters: ChaptersController::new(
                Arc::new(ChapterManager::new(chapter_repo)),
                Arc::new(ChaptersMapper),
            ),
        }
    }
}
