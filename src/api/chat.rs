// src/api/chat.rs

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

pub const CANNED_REPLY: &str = "Thanks for your message! Our concierge team will follow up \
shortly. For reservations, the Book Now flow is the fastest way to lock in dates.";

/// Canned concierge echo; there is no model behind this endpoint.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses((status = 200, description = "Canned reply"))
)]
#[post("/api/chat")]
pub async fn chat_reply(payload: web::Json<ChatRequest>) -> impl Responder {
    let _ = payload.into_inner();
    HttpResponse::Ok().json(json!({ "reply": CANNED_REPLY }))
}
