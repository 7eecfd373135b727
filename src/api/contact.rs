// src/api/contact.rs

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{db, validate, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact stored"),
        (status = 400, description = "Field validation failed"),
        (status = 500, description = "Server error")
    )
)]
#[post("/api/contact")]
pub async fn submit_contact(
    state: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    if body.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "Name is required"}));
    }
    if !validate::is_email(&body.email) {
        return HttpResponse::BadRequest().json(json!({"error": "Valid email is required"}));
    }
    if !validate::is_phone(&body.phone) {
        return HttpResponse::BadRequest().json(json!({"error": "Valid phone is required"}));
    }

    match db::insert_contact(
        &state.pool,
        body.name.trim(),
        &body.email.trim().to_lowercase(),
        body.phone.trim(),
        body.description.as_deref(),
    )
    .await
    {
        Ok(id) => {
            log::info!("contact submitted id={id}");
            HttpResponse::Ok().json(json!({"ok": true, "message": "Contact submitted"}))
        }
        Err(e) => {
            log::error!("POST /api/contact error: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to process contact"}))
        }
    }
}
