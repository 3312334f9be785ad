use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GTO analysis of one captured table image, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandAnalysis {
    pub id: String,
    #[serde(default)]
    pub hero_cards: Vec<String>,
    #[serde(default)]
    pub board_cards: Vec<String>,
    pub hero_position: Option<String>,
    pub street: Option<String>, // "preflop", "flop", "turn", "river"
    pub recommended_action: String,
    pub ev_bb: Option<f64>,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub hands_analyzed: u64,
    #[serde(default)]
    pub gto_accuracy: f64,
    #[serde(default)]
    pub quizzes_completed: u64,
    #[serde(default)]
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: uuid::Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
