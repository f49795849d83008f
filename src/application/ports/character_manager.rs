//! Character Manager Port
//!
//! 角色服务层抽象，Controller 只依赖此接口

use async_trait::async_trait;

use crate::domain::{Character, CharacterError};

/// Character Manager Port
#[async_trait]
pub trait CharacterManagerPort: Send + Sync {
    /// 读取全部角色，无数据时返回空列表
    async fn read_all(&self) -> Result<Vec<Character>, CharacterError>;

    /// 按 id 读取角色
    ///
    /// # Errors
    /// - `CharacterError::NotFound` - 不存在该 id
    async fn read_by_id(&self, id: i32) -> Result<Character, CharacterError>;

    /// 记录新角色，返回带存储层分配 id 的角色
    ///
    /// # Errors
    /// - `CharacterError::AlreadyExists` - 已存在相同 id
    async fn record(&self, character: Character) -> Result<Character, CharacterError>;

    /// 覆盖角色的全部可变字段
    ///
    /// # Errors
    /// - `CharacterError::NotFound` - 不存在该 id
    async fn modify(&self, character: Character) -> Result<Character, CharacterError>;

    /// 删除角色
    ///
    /// # Errors
    /// - `CharacterError::NotFound` - 不存在该 id
    async fn delete(&self, character: Character) -> Result<(), CharacterError>;
}
