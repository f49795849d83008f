//! Chapter Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("章节不存在: {0}")]
    NotFound(i32),

    #[error("章节已存在: {0}")]
    AlreadyExists(i32),

    #[error("存储错误: {0}")]
    StorageError(String),
}

impl From<crate::application::ports::RepositoryError> for ChapterError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::StorageError(err.to_string())
    }
}
