//! 预导入模块
//!
//! 提供常用类型的快捷导入。

pub use super::couples::Entity as Couples;
pub use super::players::Entity as Players;
pub use super::questions::Entity as Questions;
pub use super::rosters::Entity as Rosters;
pub use super::votes::Entity as Votes;
