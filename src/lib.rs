//! tzs - 剧作角色与章节管理服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Character Context: 角色
//! - Chapter Context: 章节
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repository、Manager）
//! - Managers: CRUD 服务实现
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Controller + Mapper + DTO + RESTful 路由
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
