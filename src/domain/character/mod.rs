//! Character Context - 角色限界上下文
//!
//! 职责:
//! - 角色实体定义
//! - 角色相关的领域错误

mod entity;
mod errors;

pub use entity::Character;
pub use errors::CharacterError;
