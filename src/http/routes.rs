//! 路由与处理函数

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::Html,
    routing::{get, post},
};
use serde::Serialize;

use super::error::ApiError;
use super::server::AppState;
use crate::database::dto::{BallotRequest, CoupleView, PlayerView, QuestionView, RosterRequest};
use crate::database::service;

/// 阵容更新成功响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// 选票提交成功响应
#[derive(Debug, Serialize)]
pub struct BallotResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / - 首页文档
async fn landing(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    tokio::fs::read_to_string(&state.index_path)
        .await
        .map(Html)
        .map_err(|e| {
            log::warn!("无法读取首页 {}: {}", state.index_path.display(), e);
            ApiError::PageNotFound(state.index_path.display().to_string())
        })
}

/// GET /api/players
async fn get_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerView>>, ApiError> {
    Ok(Json(service::list_players(&state.db).await?))
}

/// GET /api/couples
async fn get_couples(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CoupleView>>, ApiError> {
    Ok(Json(service::list_couples(&state.db).await?))
}

/// GET /api/questions
async fn get_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuestionView>>, ApiError> {
    Ok(Json(service::list_questions(&state.db).await?))
}

/// POST /api/roster - 替换玩家阵容
async fn update_roster(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    let update = req.validate()?;

    service::set_roster(&state.db, update.player_id, &update.couple_ids).await?;

    Ok(Json(MessageResponse {
        message: "Roster updated",
    }))
}

/// POST /api/vote - 批量提交投票
async fn submit_vote_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BallotRequest>, JsonRejection>,
) -> Result<Json<BallotResponse>, ApiError> {
    let Json(req) = payload?;
    let ballot = req.validate()?;

    service::submit_ballot(&state.db, &ballot).await?;

    Ok(Json(BallotResponse {
        status: "success",
        message: "Ballot processed",
    }))
}

/// 全部路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing))
        .route("/api/players", get(get_players))
        .route("/api/couples", get(get_couples))
        .route("/api/questions", get(get_questions))
        .route("/api/roster", post(update_roster))
        .route("/api/vote", post(submit_vote_batch))
}
