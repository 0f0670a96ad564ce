use serde::{Deserialize, Serialize};

use super::PersonaId;

/// A marketing creative brief targeting one persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeBrief {
    pub id: String,
    pub persona_id: PersonaId,
    pub persona_label: String,
    /// e.g. "Q1"
    pub quarter: String,
    /// Month within the quarter roadmap
    pub month: u8,
    pub title: String,
    pub objective: String,
    pub target_audience: String,
    pub key_message: String,
    #[serde(default)]
    pub hooks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messaging_angles: Vec<MessagingAngle>,
    #[serde(default)]
    pub motivators: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub image_prompts: Vec<String>,
    pub copy_variations: CopyVariations,
    pub success_metrics: SuccessMetrics,
    pub estimated_budget: f64,
    #[serde(default)]
    pub status: BriefStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingAngle {
    pub angle: String,
    pub description: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyVariations {
    #[serde(default)]
    pub headlines: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub cta: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMetrics {
    #[serde(rename = "primaryKPI")]
    pub primary_kpi: String,
    #[serde(rename = "targetCAC")]
    pub target_cac: f64,
    #[serde(rename = "targetLTV")]
    pub target_ltv: f64,
    pub target_payback: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BriefStatus {
    Active,
    #[default]
    Planned,
    Completed,
}

impl BriefStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BriefStatus::Active => "active",
            BriefStatus::Planned => "planned",
            BriefStatus::Completed => "completed",
        }
    }
}
