//! SQLite Persistence - SQLite 数据库持久化实现

mod chapter_repo;
mod character_repo;
mod database;

pub use chapter_repo::*;
pub use character_repo::*;
pub use database::*;
