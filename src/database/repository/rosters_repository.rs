//! 玩家-情侣关联表仓库
//!
//! 只提供显式的插入和删除，不依赖 ORM 级联。

use crate::entity::prelude::*;
use crate::entity::rosters;
use sea_orm::*;
use std::collections::HashMap;

/// 阵容关联仓库
pub struct RostersRepository;

impl RostersRepository {
    /// 清空玩家的全部阵容记录
    pub async fn clear_for_player<C>(db: &C, player_id: i32) -> Result<DeleteResult, DbErr>
    where
        C: ConnectionTrait,
    {
        Rosters::delete_many()
            .filter(rosters::Column::PlayerId.eq(player_id))
            .exec(db)
            .await
    }

    /// 为玩家批量添加情侣
    ///
    /// 返回实际插入的行数
    pub async fn add_couples<C>(db: &C, player_id: i32, couple_ids: &[i32]) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        if couple_ids.is_empty() {
            return Ok(0);
        }

        let links = couple_ids.iter().map(|&couple_id| rosters::ActiveModel {
            player_id: Set(player_id),
            couple_id: Set(couple_id),
        });

        Rosters::insert_many(links).exec_without_returning(db).await
    }

    /// 获取玩家阵容中的情侣 ID
    pub async fn couple_ids_for_player<C>(db: &C, player_id: i32) -> Result<Vec<i32>, DbErr>
    where
        C: ConnectionTrait,
    {
        let links = Rosters::find()
            .filter(rosters::Column::PlayerId.eq(player_id))
            .order_by_asc(rosters::Column::CoupleId)
            .all(db)
            .await?;

        Ok(links.into_iter().map(|link| link.couple_id).collect())
    }

    /// 一次查询获取所有玩家的阵容（避免 N+1 查询）
    ///
    /// 返回 HashMap<player_id, Vec<couple_id>>
    pub async fn all_grouped_by_player<C>(db: &C) -> Result<HashMap<i32, Vec<i32>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let links = Rosters::find()
            .order_by_asc(rosters::Column::PlayerId)
            .order_by_asc(rosters::Column::CoupleId)
            .all(db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            grouped.entry(link.player_id).or_default().push(link.couple_id);
        }

        Ok(grouped)
    }
}
