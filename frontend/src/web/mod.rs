//! 浏览器适配层
//!
//! 核心库里的抽象（存储、定时器、配置来源、路由）在这里落到浏览器 API 上。

mod config;
pub mod router;
mod storage;
mod timer;

pub use config::MetaConfig;
pub use storage::BrowserStorage;
pub use timer::GlooTimer;
