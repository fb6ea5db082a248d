use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One persisted submission. Rows are append-only: the service never updates
/// or deletes a score once written.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct ScoreRecord {
    pub id: i64,
    pub player_name: String,
    pub points: i64,
    pub level: Option<i64>,
    pub kills: Option<i64>,
    /// Stored as a JSON text column; always an array, never null.
    #[schema(value_type = Vec<String>)]
    pub achievements: Json<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    pub player_name: String,
    pub points: i64,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub kills: Option<i64>,
    /// Absent or null both collapse to an empty list.
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}
