//! 情侣实体

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "couple")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    /// 封面图片 URL
    #[sea_orm(column_type = "Text")]
    pub img: String,
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
