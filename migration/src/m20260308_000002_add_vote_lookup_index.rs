//! 为 vote 表添加 (player_id, question_id) 查询索引
//!
//! 投票 upsert 每一条都要按这两列查找现有记录。
//! 索引不是唯一索引：唯一性仍由 upsert 逻辑保证。

use sea_orm_migration::prelude::*;

const INDEX_NAME: &str = "idx_vote_player_question";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Vote::Table)
                    .col(Vote::PlayerId)
                    .col(Vote::QuestionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vote {
    Table,
    PlayerId,
    QuestionId,
}
