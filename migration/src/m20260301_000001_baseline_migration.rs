//! 基线迁移
//!
//! 创建联赛所需的全部表：
//! 1. player / couple / question 三张参考数据表
//! 2. vote 表：玩家对每个问题的预测
//! 3. rosters 关联表：玩家与其选中的两对情侣（复合主键）

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Player::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Player::Name).text().not_null())
                    .col(ColumnDef::new(Player::Avatar).text().not_null())
                    .col(ColumnDef::new(Player::Score).integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Couple::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Couple::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Couple::Name).text().not_null())
                    .col(ColumnDef::new(Couple::Img).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Question::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Question::Text).text().not_null())
                    .to_owned(),
            )
            .await?;

        // vote：(player_id, question_id) 的唯一性由业务层的 upsert 保证，不在此加约束
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vote::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vote::PlayerId).integer().not_null())
                    .col(ColumnDef::new(Vote::QuestionId).integer().not_null())
                    .col(ColumnDef::new(Vote::CoupleId).integer().not_null())
                    .col(ColumnDef::new(Vote::CreatedAt).big_integer().null())
                    .col(ColumnDef::new(Vote::UpdatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_player")
                            .from(Vote::Table, Vote::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_question")
                            .from(Vote::Table, Vote::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_couple")
                            .from(Vote::Table, Vote::CoupleId)
                            .to(Couple::Table, Couple::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rosters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rosters::PlayerId).integer().not_null())
                    .col(ColumnDef::new(Rosters::CoupleId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Rosters::PlayerId)
                            .col(Rosters::CoupleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rosters_player")
                            .from(Rosters::Table, Rosters::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rosters_couple")
                            .from(Rosters::Table, Rosters::CoupleId)
                            .to(Couple::Table, Couple::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        println!("[MIGRATION] league baseline schema created successfully");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 先删除引用方，再删除被引用的表
        manager
            .drop_table(Table::drop().table(Rosters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Couple::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    Name,
    Avatar,
    Score,
}

#[derive(DeriveIden)]
enum Couple {
    Table,
    Id,
    Name,
    Img,
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    Text,
}

#[derive(DeriveIden)]
enum Vote {
    Table,
    Id,
    PlayerId,
    QuestionId,
    CoupleId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rosters {
    Table,
    PlayerId,
    CoupleId,
}
