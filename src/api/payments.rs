// src/api/payments.rs

use actix_web::{get, post, web, HttpResponse, Responder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::models::{PaymentMethod, PaymentStatus};
use crate::{db, ids, AppState};

pub const QR_EXPIRES_IN_SECONDS: u32 = 300;

/// Matches JS `encodeURIComponent`: everything but alphanumerics and
/// `-_.!~*'()` gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// UPI deep link the QR image encodes. `merchant@upi` is the sandbox VPA;
/// a real gateway integration would issue its own.
pub fn build_upi_link(amount: f64, transaction_id: &str) -> String {
    format!(
        "upi://pay?pa=merchant@upi&pn=LuxuryStay&am={}&tn={}&tr={}",
        encode_component(&amount.to_string()),
        encode_component("LuxuryStay Booking"),
        encode_component(transaction_id),
    )
}

pub fn build_qr_image_url(upi_link: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data={}",
        encode_component(upi_link)
    )
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardChargeRequest {
    pub booking_id: String,
    /// Tokenized by the PCI-compliant gateway SDK on the client.
    pub payment_token: String,
    pub amount: f64,
}

/// Simulated card charge: no gateway is called, the payment row is
/// written SUCCESS directly.
#[utoipa::path(
    post,
    path = "/api/payment/card",
    tag = "payments",
    request_body = CardChargeRequest,
    responses(
        (status = 200, description = "Charge recorded SUCCESS"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Unknown booking"),
        (status = 500, description = "Server error")
    )
)]
#[post("/api/payment/card")]
pub async fn charge_card(
    state: web::Data<AppState>,
    payload: web::Json<CardChargeRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    if body.booking_id.is_empty() || body.payment_token.is_empty() || !(body.amount > 0.0) {
        return HttpResponse::BadRequest()
            .json(json!({"error": "bookingId, paymentToken, amount are required"}));
    }

    match db::get_booking(&state.pool, &body.booking_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({"error": "Booking not found"}));
        }
        Err(e) => {
            log::error!("POST /api/payment/card load error: {e}");
            return HttpResponse::InternalServerError().json(json!({"error": "Payment failed"}));
        }
    }

    let transaction_id = ids::new_card_transaction_id();

    // Two statements, no transaction: a crash in between leaves the
    // payment row without the booking stamp.
    if let Err(e) =
        db::insert_card_payment(&state.pool, &transaction_id, &body.booking_id, body.amount).await
    {
        log::error!("POST /api/payment/card insert error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Payment failed"}));
    }
    if let Err(e) = db::stamp_booking_payment(
        &state.pool,
        &body.booking_id,
        PaymentMethod::Card,
        &transaction_id,
    )
    .await
    {
        log::error!("POST /api/payment/card stamp error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Payment failed"}));
    }

    HttpResponse::Ok().json(json!({
        "transactionId": transaction_id,
        "status": PaymentStatus::Success,
    }))
}

#[derive(Debug, Deserialize)]
pub struct QrQuery {
    #[serde(rename = "bookingId")]
    pub booking_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/payment/qr",
    tag = "payments",
    params(("bookingId" = String, Query, description = "Booking to generate a QR payment for")),
    responses(
        (status = 200, description = "PENDING payment row with a QR image URL"),
        (status = 400, description = "bookingId missing"),
        (status = 404, description = "Unknown booking"),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/payment/qr")]
pub async fn generate_qr(state: web::Data<AppState>, query: web::Query<QrQuery>) -> impl Responder {
    let Some(booking_id) = query.into_inner().booking_id.filter(|id| !id.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({"error": "bookingId is required"}));
    };

    let booking = match db::get_booking(&state.pool, &booking_id).await {
        Ok(Some(b)) => b,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({"error": "Booking not found"}));
        }
        Err(e) => {
            log::error!("GET /api/payment/qr load error: {e}");
            return HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to generate QR"}));
        }
    };

    let transaction_id = ids::new_qr_transaction_id();
    let upi_link = build_upi_link(booking.amount, &transaction_id);
    let qr_image_url = build_qr_image_url(&upi_link);

    if let Err(e) = db::upsert_qr_payment(
        &state.pool,
        &transaction_id,
        &booking_id,
        booking.amount,
        &qr_image_url,
    )
    .await
    {
        log::error!("GET /api/payment/qr insert error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Failed to generate QR"}));
    }
    if let Err(e) = db::stamp_booking_payment(
        &state.pool,
        &booking_id,
        PaymentMethod::Qr,
        &transaction_id,
    )
    .await
    {
        log::error!("GET /api/payment/qr stamp error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Failed to generate QR"}));
    }

    // expiresIn is a client hint only; nothing expires the PENDING row.
    HttpResponse::Ok().json(json!({
        "transactionId": transaction_id,
        "qrImageUrl": qr_image_url,
        "expiresIn": QR_EXPIRES_IN_SECONDS,
    }))
}

/// Returns the stored status verbatim. There is no gateway reconciliation
/// and no webhook, so a QR payment never leaves PENDING through this
/// path; callers polling for completion will observe that.
#[utoipa::path(
    get,
    path = "/api/payment/status/{transaction_id}",
    tag = "payments",
    params(("transaction_id" = String, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Stored payment status"),
        (status = 404, description = "Unknown transaction"),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/payment/status/{transaction_id}")]
pub async fn payment_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let transaction_id = path.into_inner();

    match db::get_payment(&state.pool, &transaction_id).await {
        Ok(Some(payment)) => HttpResponse::Ok().json(json!({
            "transactionId": payment.transaction_id,
            "status": payment.status,
            "bookingId": payment.booking_id,
        })),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Transaction not found"})),
        Err(e) => {
            log::error!("GET /api/payment/status error: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch status"}))
        }
    }
}
