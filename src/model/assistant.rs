use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Capability card on the chat page sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "title": "Policy Knowledge",
        "description": "Access to company policies, procedures, and guidelines",
        "accuracy": 98
    })
)]
pub struct AssistantCapability {
    pub title: String,
    pub description: String,
    /// Showcase figure, 0..=100.
    pub accuracy: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeatureStatus {
    Active,
    Developing,
}

/// Feature card on the analytics dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisFeature {
    #[schema(example = "Attrition Risk Analysis")]
    pub title: String,
    pub description: String,
    pub status: FeatureStatus,
    #[schema(example = 89)]
    pub accuracy: u8,
}

/// Result of a simulated analysis run. The figures are canned; only the
/// artificial latency and the cache around it are real.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "performance_score": 87,
        "attrition_risk": 12,
        "satisfaction_index": 78,
        "productivity_trend": "+15%",
        "recommendations": ["Implement flexible work arrangements to reduce attrition risk"]
    })
)]
pub struct AnalysisReport {
    pub performance_score: u8,
    pub attrition_risk: u8,
    pub satisfaction_index: u8,
    #[schema(example = "+15%")]
    pub productivity_trend: String,
    pub recommendations: Vec<String>,
}
