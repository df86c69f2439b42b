//! 数据实体模块
//!
//! 包含所有 SeaORM 实体定义，与迁移中创建的表一一对应。

pub mod prelude;

// === 参考数据（种子初始化后不再变化）===
pub mod couples;
pub mod players;
pub mod questions;

// === 业务数据 ===
pub mod rosters;
pub mod votes;
