use crate::entity::prelude::*;
use crate::entity::votes;
use sea_orm::*;

/// upsert 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// 投票数据仓库
pub struct VotesRepository;

impl VotesRepository {
    /// 查询玩家在某问题上的投票
    ///
    /// 在事务中调用时能看到同一事务内尚未提交的插入
    pub async fn find_by_player_and_question<C>(
        db: &C,
        player_id: i32,
        question_id: i32,
    ) -> Result<Option<votes::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Votes::find()
            .filter(
                votes::Column::PlayerId
                    .eq(player_id)
                    .and(votes::Column::QuestionId.eq(question_id)),
            )
            .order_by_asc(votes::Column::Id)
            .one(db)
            .await
    }

    /// 写入投票：已存在则覆盖 couple_id，否则新建
    pub async fn upsert<C>(
        db: &C,
        player_id: i32,
        question_id: i32,
        couple_id: i32,
    ) -> Result<UpsertOutcome, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().timestamp();

        match Self::find_by_player_and_question(db, player_id, question_id).await? {
            Some(existing) => {
                let mut active: votes::ActiveModel = existing.into();
                active.couple_id = Set(couple_id);
                active.updated_at = Set(Some(now));
                active.update(db).await?;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                let vote = votes::ActiveModel {
                    id: NotSet,
                    player_id: Set(player_id),
                    question_id: Set(question_id),
                    couple_id: Set(couple_id),
                    created_at: Set(Some(now)),
                    updated_at: Set(Some(now)),
                };
                vote.insert(db).await?;
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    /// 获取玩家的全部投票（按问题 ID 升序）
    #[cfg(test)]
    pub async fn find_by_player<C>(db: &C, player_id: i32) -> Result<Vec<votes::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Votes::find()
            .filter(votes::Column::PlayerId.eq(player_id))
            .order_by_asc(votes::Column::QuestionId)
            .all(db)
            .await
    }

    /// 统计玩家在某问题上的投票行数（正常情况下为 0 或 1）
    #[cfg(test)]
    pub async fn count_for<C>(db: &C, player_id: i32, question_id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Votes::find()
            .filter(
                votes::Column::PlayerId
                    .eq(player_id)
                    .and(votes::Column::QuestionId.eq(question_id)),
            )
            .count(db)
            .await
    }

    /// 获取投票总数
    #[cfg(test)]
    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Votes::find().count(db).await
    }
}
