//! HTTP Handlers
//!
//! axum 处理函数，只负责提取参数并调用 Controller

mod chapters;
mod characters;
mod ping;

pub use chapters::*;
pub use characters::*;
pub use ping::*;
