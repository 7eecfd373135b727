// src/api/profile.rs

use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

/// Static demo profile used by the wizard's autofill. A real deployment
/// would derive the user from a session and read the row from the store.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub id_image_url: Option<&'static str>,
}

pub fn demo_profile() -> Profile {
    Profile {
        first_name: "Aarav",
        last_name: "Sharma",
        email: "aarav.sharma@example.com",
        phone: "+91 98765 43210",
        id_image_url: None,
    }
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses((status = 200, description = "Demo profile for autofill", body = Profile))
)]
#[get("/api/profile")]
pub async fn get_profile() -> impl Responder {
    HttpResponse::Ok().json(demo_profile())
}
