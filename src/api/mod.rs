// src/api/mod.rs

pub mod bookings;
pub mod chat;
pub mod contact;
pub mod payments;
pub mod profile;

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service liveness"))
)]
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true }))
}
