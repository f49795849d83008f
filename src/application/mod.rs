//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（Repository、Manager）
//! - managers: 基于 Repository 的 CRUD 服务实现

pub mod managers;
pub mod ports;

pub use managers::{ChapterManager, CharacterManager};

pub use ports::{
    ChapterManagerPort, ChapterRepositoryPort, CharacterManagerPort, CharacterRepositoryPort,
    RepositoryError,
};
