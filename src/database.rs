pub mod connection;
pub mod dto;
pub mod repository;
pub mod seed;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

// 重新导出 service 中的所有内容方便使用
pub use service::*;
