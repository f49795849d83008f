//! 基础设施层
//!
//! - http: REST API（Controller、Mapper、DTO、路由）
//! - persistence: SQLite 仓储
//! - memory: 内存仓储

pub mod http;
pub mod memory;
pub mod persistence;
