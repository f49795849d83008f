//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Character Context: 剧作角色
//! - Chapter Context: 剧作章节（幕/场编号）

pub mod chapter;
pub mod character;

pub use chapter::{Chapter, ChapterError};
pub use character::{Character, CharacterError};
