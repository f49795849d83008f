//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节实体定义（幕、场、所属作品）
//! - 章节相关的领域错误

mod entity;
mod errors;

pub use entity::Chapter;
pub use errors::ChapterError;
