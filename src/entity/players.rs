//! 玩家实体
//!
//! 玩家在种子初始化时创建，之后不再新增。score 由外部维护，本服务只读。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    /// 单个 emoji 头像
    #[sea_orm(column_type = "Text")]
    pub avatar: String,
    pub score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rosters::Entity")]
    Rosters,
    #[sea_orm(has_many = "super::votes::Entity")]
    Votes,
}

impl Related<super::rosters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rosters.def()
    }
}

impl Related<super::votes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
