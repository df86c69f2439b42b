//! 数据传输对象 (DTO)
//!
//! 请求体和对外视图的结构定义。JSON 字段名使用 camelCase。
//! 请求中的字段全部是 Option，由 `validate` 做存在性检查，
//! 保证缺字段时整个请求在访问数据库之前就被拒绝。

use crate::entity::{couples, players, questions};
use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// 每个玩家阵容中的情侣数量
pub const ROSTER_SIZE: usize = 2;

// ==================== 对外视图 ====================

/// 玩家视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: i32,
    pub name: String,
    pub avatar: String,
    pub score: i32,
    /// 阵容中的情侣 ID，顺序不保证
    pub roster: Vec<i32>,
}

impl PlayerView {
    pub fn from_model(player: players::Model, roster: Vec<i32>) -> Self {
        Self {
            id: player.id,
            name: player.name,
            avatar: player.avatar,
            score: player.score,
            roster,
        }
    }
}

/// 情侣视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupleView {
    pub id: i32,
    pub name: String,
    pub img: String,
}

impl From<couples::Model> for CoupleView {
    fn from(c: couples::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            img: c.img,
        }
    }
}

/// 问题视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i32,
    pub text: String,
}

impl From<questions::Model> for QuestionView {
    fn from(q: questions::Model) -> Self {
        Self {
            id: q.id,
            text: q.text,
        }
    }
}

// ==================== 请求体 ====================

/// POST /api/roster 请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRequest {
    pub player_id: Option<i32>,
    pub couple_ids: Option<Vec<i32>>,
}

/// 校验后的阵容更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterUpdate {
    pub player_id: i32,
    pub couple_ids: Vec<i32>,
}

impl RosterRequest {
    /// 存在性与长度检查
    ///
    /// coupleIds 必须恰好包含两个不同的 ID
    pub fn validate(self) -> Result<RosterUpdate, ServiceError> {
        let player_id = self
            .player_id
            .ok_or_else(|| ServiceError::validation("playerId is required"))?;
        let couple_ids = self
            .couple_ids
            .ok_or_else(|| ServiceError::validation("coupleIds is required"))?;

        validate_roster_ids(&couple_ids)?;

        Ok(RosterUpdate {
            player_id,
            couple_ids,
        })
    }
}

/// 阵容 ID 列表的长度与去重检查
pub fn validate_roster_ids(couple_ids: &[i32]) -> Result<(), ServiceError> {
    if couple_ids.len() != ROSTER_SIZE {
        return Err(ServiceError::validation(format!(
            "coupleIds must contain exactly {} ids, got {}",
            ROSTER_SIZE,
            couple_ids.len()
        )));
    }

    for (i, id) in couple_ids.iter().enumerate() {
        if couple_ids[..i].contains(id) {
            return Err(ServiceError::validation(format!(
                "coupleIds contains duplicate id {}",
                id
            )));
        }
    }

    Ok(())
}

/// 投票条目（请求中的原始形态）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEntry {
    pub question_id: Option<i32>,
    pub couple_id: Option<i32>,
}

/// POST /api/vote 请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotRequest {
    pub player_id: Option<i32>,
    pub votes: Option<Vec<VoteEntry>>,
}

/// 校验后的单条投票
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallotVote {
    pub question_id: i32,
    pub couple_id: i32,
}

/// 校验后的选票
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    pub player_id: i32,
    pub votes: Vec<BallotVote>,
}

impl BallotRequest {
    /// 存在性检查：任一条目缺字段则整批拒绝
    pub fn validate(self) -> Result<Ballot, ServiceError> {
        let player_id = self
            .player_id
            .ok_or_else(|| ServiceError::validation("playerId is required"))?;
        let entries = self
            .votes
            .ok_or_else(|| ServiceError::validation("votes is required"))?;

        let votes = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let question_id = entry.question_id.ok_or_else(|| {
                    ServiceError::validation(format!("votes[{}].questionId is required", index))
                })?;
                let couple_id = entry.couple_id.ok_or_else(|| {
                    ServiceError::validation(format!("votes[{}].coupleId is required", index))
                })?;
                Ok(BallotVote {
                    question_id,
                    couple_id,
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        Ok(Ballot { player_id, votes })
    }
}
