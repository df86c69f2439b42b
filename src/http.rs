//! HTTP 层
//!
//! - JSON API：玩家 / 情侣 / 问题只读接口，阵容与投票写接口
//! - 首页静态文档
//! - CORS、请求追踪、优雅关闭

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, ServerError, build_router, run_server};
