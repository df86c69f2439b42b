use crate::entity::prelude::*;
use crate::entity::questions;
use sea_orm::*;

/// 问题数据仓库
pub struct QuestionsRepository;

impl QuestionsRepository {
    /// 插入问题（仅种子初始化使用）
    pub async fn insert<C>(db: &C, text: &str) -> Result<questions::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let question = questions::ActiveModel {
            id: NotSet,
            text: Set(text.to_string()),
        };

        question.insert(db).await
    }

    /// 获取所有问题（按 ID 升序）
    pub async fn find_all<C>(db: &C) -> Result<Vec<questions::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Questions::find()
            .order_by_asc(questions::Column::Id)
            .all(db)
            .await
    }

    /// 批量查询存在的问题 ID
    pub async fn existing_ids<C>(db: &C, ids: &[i32]) -> Result<Vec<i32>, DbErr>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Questions::find()
            .select_only()
            .column(questions::Column::Id)
            .filter(questions::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(db)
            .await
    }

    /// 获取问题总数
    #[cfg(test)]
    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Questions::find().count(db).await
    }
}
