//! 数据仓库
//!
//! 每张表一个仓库，方法均对 `ConnectionTrait` 泛型，
//! 既可直接传 `DatabaseConnection`，也可传事务句柄。

pub mod couples_repository;
pub mod players_repository;
pub mod questions_repository;
pub mod rosters_repository;
pub mod votes_repository;
