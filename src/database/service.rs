//! 联赛业务服务
//!
//! 每个写操作对应一个事务：所有检查和写入都通过事务句柄完成，
//! 任一步失败时事务随 drop 回滚，调用方看不到部分写入。

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashSet;

use crate::database::dto::{Ballot, CoupleView, PlayerView, QuestionView, validate_roster_ids};
use crate::database::repository::{
    couples_repository::CouplesRepository,
    players_repository::PlayersRepository,
    questions_repository::QuestionsRepository,
    rosters_repository::RostersRepository,
    votes_repository::{UpsertOutcome, VotesRepository},
};
use crate::error::{ServiceError, ServiceResult};

/// 选票处理结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallotSummary {
    pub inserted: usize,
    pub updated: usize,
}

impl BallotSummary {
    pub fn processed(&self) -> usize {
        self.inserted + self.updated
    }
}

/// 按输入顺序返回第一个不在 `existing` 中的 ID
fn first_missing(requested: &[i32], existing: &[i32]) -> Option<i32> {
    let existing: HashSet<i32> = existing.iter().copied().collect();
    requested.iter().copied().find(|id| !existing.contains(id))
}

// ==================== 阵容 ====================

/// 替换玩家的阵容
///
/// 先清空再重新插入，而不是计算差异。
/// 玩家或任一情侣不存在时整体失败，原阵容保持不变。
pub async fn set_roster(
    db: &DatabaseConnection,
    player_id: i32,
    couple_ids: &[i32],
) -> ServiceResult<Vec<i32>> {
    validate_roster_ids(couple_ids)?;

    let txn = db.begin().await?;

    if !PlayersRepository::exists(&txn, player_id).await? {
        return Err(ServiceError::NotFound {
            resource: "player",
            id: player_id,
        });
    }

    let existing = CouplesRepository::existing_ids(&txn, couple_ids).await?;
    if let Some(id) = first_missing(couple_ids, &existing) {
        return Err(ServiceError::NotFound {
            resource: "couple",
            id,
        });
    }

    let removed = RostersRepository::clear_for_player(&txn, player_id).await?;
    RostersRepository::add_couples(&txn, player_id, couple_ids).await?;
    let roster = RostersRepository::couple_ids_for_player(&txn, player_id).await?;

    txn.commit().await?;

    log::info!(
        "玩家 {} 阵容已更新: {:?}（移除 {} 条旧记录）",
        player_id,
        roster,
        removed.rows_affected
    );
    Ok(roster)
}

// ==================== 投票 ====================

/// 提交一批投票
///
/// 按输入顺序逐条 upsert。同一批次中同一问题出现多次时，
/// 后一条能在事务内看到前一条的插入，因此只会留下一行，以最后一条为准。
pub async fn submit_ballot(
    db: &DatabaseConnection,
    ballot: &Ballot,
) -> ServiceResult<BallotSummary> {
    let txn = db.begin().await?;

    if !PlayersRepository::exists(&txn, ballot.player_id).await? {
        return Err(ServiceError::NotFound {
            resource: "player",
            id: ballot.player_id,
        });
    }

    let question_ids: Vec<i32> = ballot.votes.iter().map(|v| v.question_id).collect();
    let existing = QuestionsRepository::existing_ids(&txn, &question_ids).await?;
    if let Some(id) = first_missing(&question_ids, &existing) {
        return Err(ServiceError::NotFound {
            resource: "question",
            id,
        });
    }

    let couple_ids: Vec<i32> = ballot.votes.iter().map(|v| v.couple_id).collect();
    let existing = CouplesRepository::existing_ids(&txn, &couple_ids).await?;
    if let Some(id) = first_missing(&couple_ids, &existing) {
        return Err(ServiceError::NotFound {
            resource: "couple",
            id,
        });
    }

    let mut summary = BallotSummary::default();
    for vote in &ballot.votes {
        match VotesRepository::upsert(&txn, ballot.player_id, vote.question_id, vote.couple_id)
            .await?
        {
            UpsertOutcome::Inserted => summary.inserted += 1,
            UpsertOutcome::Updated => summary.updated += 1,
        }
    }

    txn.commit().await?;

    log::info!(
        "玩家 {} 提交选票 {} 条: 新增 {} 条, 更新 {} 条",
        ballot.player_id,
        summary.processed(),
        summary.inserted,
        summary.updated
    );
    Ok(summary)
}

// ==================== 只读视图 ====================

/// 获取所有玩家及其阵容
pub async fn list_players(db: &DatabaseConnection) -> ServiceResult<Vec<PlayerView>> {
    let players = PlayersRepository::find_all(db).await?;
    let mut rosters = RostersRepository::all_grouped_by_player(db).await?;

    Ok(players
        .into_iter()
        .map(|player| {
            let roster = rosters.remove(&player.id).unwrap_or_default();
            PlayerView::from_model(player, roster)
        })
        .collect())
}

/// 获取所有情侣
pub async fn list_couples(db: &DatabaseConnection) -> ServiceResult<Vec<CoupleView>> {
    Ok(CouplesRepository::find_all(db)
        .await?
        .into_iter()
        .map(CoupleView::from)
        .collect())
}

/// 获取所有问题
pub async fn list_questions(db: &DatabaseConnection) -> ServiceResult<Vec<QuestionView>> {
    Ok(QuestionsRepository::find_all(db)
        .await?
        .into_iter()
        .map(QuestionView::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dto::BallotVote;
    use crate::database::test_support::seeded_db;
    use sea_orm::ConnectionTrait;

    fn ballot(player_id: i32, votes: &[(i32, i32)]) -> Ballot {
        Ballot {
            player_id,
            votes: votes
                .iter()
                .map(|&(question_id, couple_id)| BallotVote {
                    question_id,
                    couple_id,
                })
                .collect(),
        }
    }

    async fn roster_of(db: &DatabaseConnection, player_id: i32) -> Vec<i32> {
        let mut roster = list_players(db)
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == player_id)
            .unwrap()
            .roster;
        roster.sort_unstable();
        roster
    }

    #[tokio::test]
    async fn seeded_lists_have_fixture_sizes() {
        let (_dir, db) = seeded_db().await;

        let couples = list_couples(&db).await.unwrap();
        assert_eq!(couples.len(), 9);
        assert_eq!(couples[0].name, "Alissa & David");
        assert_eq!(list_questions(&db).await.unwrap().len(), 4);

        let players = list_players(&db).await.unwrap();
        assert_eq!(players.len(), 5);
        assert!(players.iter().all(|p| p.roster.is_empty()));
    }

    #[tokio::test]
    async fn set_roster_then_list_players() {
        let (_dir, db) = seeded_db().await;

        let roster = set_roster(&db, 1, &[2, 1]).await.unwrap();
        assert_eq!(roster, vec![1, 2]);
        assert_eq!(roster_of(&db, 1).await, vec![1, 2]);
        assert!(roster_of(&db, 2).await.is_empty());
    }

    #[tokio::test]
    async fn set_roster_replaces_previous_roster() {
        let (_dir, db) = seeded_db().await;

        set_roster(&db, 3, &[1, 2]).await.unwrap();
        set_roster(&db, 3, &[5, 9]).await.unwrap();
        assert_eq!(roster_of(&db, 3).await, vec![5, 9]);

        // 与旧阵容部分重叠
        set_roster(&db, 3, &[9, 4]).await.unwrap();
        assert_eq!(roster_of(&db, 3).await, vec![4, 9]);
    }

    #[tokio::test]
    async fn wrong_length_roster_leaves_prior_roster() {
        let (_dir, db) = seeded_db().await;
        set_roster(&db, 1, &[1, 2]).await.unwrap();

        for ids in [&[3][..], &[3, 4, 5][..]] {
            let err = set_roster(&db, 1, ids).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
        assert_eq!(roster_of(&db, 1).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn unknown_player_or_couple_is_rejected_without_mutation() {
        let (_dir, db) = seeded_db().await;
        set_roster(&db, 2, &[6, 7]).await.unwrap();

        let err = set_roster(&db, 99, &[1, 2]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                resource: "player",
                id: 99
            }
        ));

        let err = set_roster(&db, 2, &[1, 42]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                resource: "couple",
                id: 42
            }
        ));
        assert_eq!(roster_of(&db, 2).await, vec![6, 7]);
    }

    #[tokio::test]
    async fn duplicate_couple_ids_are_rejected() {
        let (_dir, db) = seeded_db().await;
        let err = set_roster(&db, 1, &[3, 3]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(roster_of(&db, 1).await.is_empty());
    }

    #[tokio::test]
    async fn resubmitted_vote_overwrites_in_place() {
        let (_dir, db) = seeded_db().await;

        let first = submit_ballot(&db, &ballot(1, &[(1, 2)])).await.unwrap();
        assert_eq!(first.inserted, 1);
        let second = submit_ballot(&db, &ballot(1, &[(1, 3)])).await.unwrap();
        assert_eq!(second.updated, 1);

        assert_eq!(VotesRepository::count_for(&db, 1, 1).await.unwrap(), 1);
        let vote = VotesRepository::find_by_player_and_question(&db, 1, 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(vote.couple_id, 3);
    }

    #[tokio::test]
    async fn duplicate_question_in_batch_is_last_write_wins() {
        let (_dir, db) = seeded_db().await;

        let summary = submit_ballot(&db, &ballot(4, &[(2, 5), (3, 1), (2, 8)]))
            .await
            .unwrap();
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.processed(), 3);

        assert_eq!(VotesRepository::count_for(&db, 4, 2).await.unwrap(), 1);
        let votes = VotesRepository::find_by_player(&db, 4).await.unwrap();
        let picks: Vec<(i32, i32)> = votes.iter().map(|v| (v.question_id, v.couple_id)).collect();
        assert_eq!(picks, vec![(2, 8), (3, 1)]);
    }

    #[tokio::test]
    async fn ballot_with_unknown_reference_is_rejected() {
        let (_dir, db) = seeded_db().await;

        let err = submit_ballot(&db, &ballot(1, &[(1, 2), (2, 77)]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound {
                resource: "couple",
                id: 77
            }
        ));

        let err = submit_ballot(&db, &ballot(1, &[(1, 2), (12, 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { resource: "question", .. }));

        let err = submit_ballot(&db, &ballot(50, &[(1, 2)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { resource: "player", .. }));

        assert_eq!(VotesRepository::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn storage_failure_mid_ballot_rolls_back_earlier_upserts() {
        let (_dir, db) = seeded_db().await;
        db.execute_unprepared(
            "CREATE TRIGGER reject_couple_8 BEFORE INSERT ON vote \
             WHEN NEW.couple_id = 8 BEGIN SELECT RAISE(ABORT, 'couple 8 rejected'); END",
        )
        .await
        .unwrap();

        // 第一条已写入事务，第二条被触发器拒绝
        let err = submit_ballot(&db, &ballot(1, &[(1, 2), (2, 8)]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert_eq!(VotesRepository::count(&db).await.unwrap(), 0);

        // 连接仍可用
        let summary = submit_ballot(&db, &ballot(1, &[(1, 2)])).await.unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(VotesRepository::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_ballot_is_accepted() {
        let (_dir, db) = seeded_db().await;
        let summary = submit_ballot(&db, &ballot(1, &[])).await.unwrap();
        assert_eq!(summary, BallotSummary::default());
    }

    #[test]
    fn first_missing_follows_input_order() {
        assert_eq!(first_missing(&[5, 3, 9], &[5]), Some(3));
        assert_eq!(first_missing(&[1, 2], &[2, 1]), None);
    }
}
