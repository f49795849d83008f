//! Character Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("角色不存在: {0}")]
    NotFound(i32),

    #[error("角色已存在: {0}")]
    AlreadyExists(i32),

    #[error("存储错误: {0}")]
    StorageError(String),
}

impl From<crate::application::ports::RepositoryError> for CharacterError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::StorageError(err.to_string())
    }
}
