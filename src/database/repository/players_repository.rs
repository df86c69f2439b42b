use crate::entity::players;
use crate::entity::prelude::*;
use sea_orm::*;

/// 玩家数据仓库
pub struct PlayersRepository;

impl PlayersRepository {
    /// 插入玩家（仅种子初始化使用，score 从 0 开始）
    pub async fn insert<C>(db: &C, name: &str, avatar: &str) -> Result<players::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let player = players::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            avatar: Set(avatar.to_string()),
            score: Set(0),
        };

        player.insert(db).await
    }

    /// 获取所有玩家（按 ID 升序）
    pub async fn find_all<C>(db: &C) -> Result<Vec<players::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Players::find()
            .order_by_asc(players::Column::Id)
            .all(db)
            .await
    }

    /// 检查玩家是否存在
    pub async fn exists<C>(db: &C, id: i32) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Players::find_by_id(id).count(db).await? > 0)
    }

    /// 获取玩家总数
    #[cfg(test)]
    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Players::find().count(db).await
    }
}
