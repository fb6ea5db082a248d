use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::score::{ScoreRecord, SubmitScoreRequest};
use crate::AppState;

const TOP_LIMIT: i64 = 10;

#[utoipa::path(
    get,
    path = "/leaderboard",
    responses(
        (status = 200, description = "Top 10 scores, highest points first", body = Vec<ScoreRecord>),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ScoreRecord>>, ApiError> {
    // Equal points rank by submission order (lower id first).
    let scores = sqlx::query_as::<_, ScoreRecord>(
        "SELECT id, player_name, points, level, kills, achievements
         FROM scores ORDER BY points DESC, id ASC LIMIT ?",
    )
    .bind(TOP_LIMIT)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(scores))
}

#[utoipa::path(
    post,
    path = "/submit-score",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score persisted", body = ScoreRecord),
        (status = 422, description = "Missing required field or wrong type"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ScoreRecord>), ApiError> {
    let Json(payload) = payload?;

    let achievements = payload.achievements.unwrap_or_default();

    let record = sqlx::query_as::<_, ScoreRecord>(
        "INSERT INTO scores (player_name, points, level, kills, achievements)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, player_name, points, level, kills, achievements",
    )
    .bind(&payload.player_name)
    .bind(payload.points)
    .bind(payload.level)
    .bind(payload.kills)
    .bind(sqlx::types::Json(achievements))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
