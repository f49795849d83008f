//! Application Ports - 端口定义
//!
//! 定义应用层与基础设施层、接入层之间的抽象接口

mod chapter_manager;
mod character_manager;
mod repositories;

pub use chapter_manager::ChapterManagerPort;
pub use character_manager::CharacterManagerPort;
pub use repositories::{ChapterRepositoryPort, CharacterRepositoryPort, RepositoryError};
