//! Controllers
//!
//! 编排 Mapper 与 Manager：DTO → 实体 → Manager → 实体 → DTO，
//! 并把领域错误转换为对外可见的 ApiError

mod chapters;
mod characters;

pub use chapters::ChaptersController;
pub use characters::CharactersController;
