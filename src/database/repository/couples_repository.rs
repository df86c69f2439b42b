use crate::entity::couples;
use crate::entity::prelude::*;
use sea_orm::*;

/// 情侣数据仓库
pub struct CouplesRepository;

impl CouplesRepository {
    /// 插入情侣（仅种子初始化使用）
    pub async fn insert<C>(db: &C, name: &str, img: &str) -> Result<couples::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let couple = couples::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            img: Set(img.to_string()),
        };

        couple.insert(db).await
    }

    /// 获取所有情侣（按 ID 升序）
    pub async fn find_all<C>(db: &C) -> Result<Vec<couples::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Couples::find()
            .order_by_asc(couples::Column::Id)
            .all(db)
            .await
    }

    /// 批量查询存在的情侣 ID
    ///
    /// 返回值只包含数据库中真实存在的 ID，调用方据此判断缺失项
    pub async fn existing_ids<C>(db: &C, ids: &[i32]) -> Result<Vec<i32>, DbErr>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Couples::find()
            .select_only()
            .column(couples::Column::Id)
            .filter(couples::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(db)
            .await
    }

    /// 是否至少存在一对情侣（种子初始化的判定条件）
    pub async fn any_exists<C>(db: &C) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Couples::find().one(db).await?.is_some())
    }

    /// 获取情侣总数
    #[cfg(test)]
    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Couples::find().count(db).await
    }
}
