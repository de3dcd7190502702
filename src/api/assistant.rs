use std::time::Duration;

use actix_web::{HttpResponse, Responder, rt, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::assistant;
use crate::config::Config;
use crate::model::assistant::{AnalysisFeature, AnalysisReport, AssistantCapability};
use crate::model::chat::{ChatMessage, Sender};
use crate::store::DataStore;
use crate::utils::analysis_cache;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "How do I request time off?")]
    pub text: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: ChatMessage,
}

#[derive(Serialize, ToSchema)]
pub struct TranscriptResponse {
    pub data: Vec<ChatMessage>,
    #[schema(example = 3)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct CapabilityResponse {
    pub data: Vec<AssistantCapability>,
}

#[derive(Serialize, ToSchema)]
pub struct FeatureResponse {
    pub data: Vec<AnalysisFeature>,
}

#[derive(Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub report: AnalysisReport,
    /// True when the report was served from the result cache without the
    /// simulated analysis delay
    #[schema(example = false)]
    pub cached: bool,
}

/// Chat transcript so far
#[utoipa::path(
    get,
    path = "/api/assistant/chat",
    responses((status = 200, description = "Transcript, oldest first", body = TranscriptResponse)),
    tag = "Assistant"
)]
pub async fn transcript(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    let data = store.chat();
    let total = data.len();
    Ok(HttpResponse::Ok().json(TranscriptResponse { data, total }))
}

/// Send a message to the scripted assistant
///
/// The reply is looked up in the keyword rule table after the configured
/// typing delay; both messages land on the transcript.
#[utoipa::path(
    post,
    path = "/api/assistant/chat",
    request_body(content = ChatRequest, content_type = "application/json"),
    responses((status = 200, description = "The assistant's reply", body = ChatResponse)),
    tag = "Assistant"
)]
pub async fn chat(
    store: web::Data<DataStore>,
    config: web::Data<Config>,
    payload: web::Json<ChatRequest>,
) -> actix_web::Result<impl Responder> {
    let text = payload.into_inner().text;

    store.append_chat(ChatMessage {
        id: Uuid::new_v4().to_string(),
        text: text.clone(),
        sender: Sender::User,
        timestamp: Utc::now(),
        suggestions: None,
    });

    // Simulated typing latency, then the scripted lookup.
    rt::time::sleep(Duration::from_millis(config.chat_reply_delay_ms)).await;

    let scripted = assistant::respond(&text);
    let reply = ChatMessage {
        id: Uuid::new_v4().to_string(),
        text: scripted.text.to_string(),
        sender: Sender::Bot,
        timestamp: Utc::now(),
        suggestions: Some(scripted.suggestions.iter().map(|s| s.to_string()).collect()),
    };
    store.append_chat(reply.clone());

    Ok(HttpResponse::Ok().json(ChatResponse { reply }))
}

/// Capability cards on the chat page
#[utoipa::path(
    get,
    path = "/api/assistant/capabilities",
    responses((status = 200, description = "Assistant capabilities", body = CapabilityResponse)),
    tag = "Assistant"
)]
pub async fn capabilities(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(CapabilityResponse {
        data: store.capabilities().to_vec(),
    }))
}

/// Feature cards on the analytics dashboard
#[utoipa::path(
    get,
    path = "/api/assistant/features",
    responses((status = 200, description = "Analysis features", body = FeatureResponse)),
    tag = "Assistant"
)]
pub async fn features(store: web::Data<DataStore>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(FeatureResponse {
        data: store.analysis_features().to_vec(),
    }))
}

/// Run the simulated analysis
///
/// First run per employee waits the configured analysis delay; repeat runs
/// inside the cache TTL return the held report immediately.
#[utoipa::path(
    post,
    path = "/api/assistant/analysis",
    responses((status = 200, description = "Analysis report", body = AnalysisResponse)),
    tag = "Assistant"
)]
pub async fn run_analysis(
    store: web::Data<DataStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let employee_id = store.profile().id;

    if let Some(report) = analysis_cache::get(employee_id).await {
        return Ok(HttpResponse::Ok().json(AnalysisResponse {
            report,
            cached: true,
        }));
    }

    rt::time::sleep(Duration::from_millis(config.analysis_delay_ms)).await;

    let report = assistant::canned_analysis();
    analysis_cache::put(employee_id, report.clone()).await;
    tracing::info!(employee_id, "Analysis run finished");

    Ok(HttpResponse::Ok().json(AnalysisResponse {
        report,
        cached: false,
    }))
}
