use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. The transcript is append-only; messages are never
/// edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "8b5c1c3e-2b0a-4b6e-9b43-7f6d1a2c9f10",
        "text": "How do I request time off?",
        "sender": "user",
        "timestamp": "2024-01-15T09:00:00Z",
        "suggestions": null
    })
)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    #[schema(value_type = String, format = "date-time")]
    pub timestamp: DateTime<Utc>,
    #[schema(nullable = true)]
    pub suggestions: Option<Vec<String>>,
}
