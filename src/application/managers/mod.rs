//! Managers 实现
//!
//! 基于 Repository Port 的 CRUD 服务层

mod chapter_manager;
mod character_manager;

pub use chapter_manager::ChapterManager;
pub use character_manager::CharacterManager;
