// src/api/bookings.rs

use actix_web::{get, post, put, web, HttpResponse, Responder};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::models::BookingStatus;
use crate::{db, ids, pricing, validate, AppState};

/// Accepts `YYYY-MM-DD` (date inputs) or a full RFC3339 timestamp
/// (checkout clients send ISO strings).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = s.parse::<NaiveDate>() {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Checkout variant: the wizard posts this right before payment.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBooking {
    pub check_in: String,
    pub check_out: String,
    pub amount: f64,
    #[serde(default)]
    pub guests: Option<i32>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Enquiry variant: the standalone booking form with contact details.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: i32,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Versioned create schema: a body carrying `amount` is a checkout,
/// anything else must be a full enquiry.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateBookingRequest {
    Checkout(CheckoutBooking),
    Enquiry(EnquiryBooking),
}

/// Pre-insert validation for the checkout variant. Returns the parsed
/// dates and the effective guest count (omitted guests default to 1,
/// an explicit count below 1 is rejected).
pub fn validate_checkout(
    body: &CheckoutBooking,
) -> Result<(NaiveDate, NaiveDate, i32), &'static str> {
    let (Some(check_in), Some(check_out)) =
        (parse_date(&body.check_in), parse_date(&body.check_out))
    else {
        return Err("Dates are required");
    };
    if !(body.amount > 0.0) {
        return Err("Amount must be > 0");
    }
    if let Some(g) = body.guests {
        if g < 1 {
            return Err("Guests must be >= 1");
        }
    }
    Ok((check_in, check_out, body.guests.unwrap_or(1)))
}

/// Pre-insert validation for the enquiry variant.
pub fn validate_enquiry(body: &EnquiryBooking) -> Result<(NaiveDate, NaiveDate), &'static str> {
    if body.name.trim().is_empty() {
        return Err("Name is required");
    }
    if !validate::is_email(&body.email) {
        return Err("Valid email is required");
    }
    if !validate::is_phone(&body.phone) {
        return Err("Valid phone is required");
    }
    let (Some(check_in), Some(check_out)) =
        (parse_date(&body.check_in), parse_date(&body.check_out))
    else {
        return Err("Dates are required");
    };
    if body.guests < 1 {
        return Err("Guests must be >= 1");
    }
    Ok((check_in, check_out))
}

#[utoipa::path(
    get,
    path = "/api/booking",
    tag = "bookings",
    responses(
        (status = 200, description = "Bookings, newest first, capped at 100"),
        (status = 500, description = "Server error")
    )
)]
#[get("/api/booking")]
pub async fn list_bookings(state: web::Data<AppState>) -> impl Responder {
    match db::list_bookings(&state.pool).await {
        Ok(items) => HttpResponse::Ok().json(json!({ "items": items })),
        Err(e) => {
            log::error!("GET /api/booking error: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to load"}))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/booking",
    tag = "bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created PENDING"),
        (status = 400, description = "Field validation failed"),
        (status = 500, description = "Server error")
    )
)]
#[post("/api/booking")]
pub async fn create_booking(
    state: web::Data<AppState>,
    payload: web::Json<CreateBookingRequest>,
) -> impl Responder {
    match payload.into_inner() {
        CreateBookingRequest::Checkout(body) => create_checkout(&state, body).await,
        CreateBookingRequest::Enquiry(body) => create_enquiry(&state, body).await,
    }
}

async fn create_checkout(state: &AppState, body: CheckoutBooking) -> HttpResponse {
    let (check_in, check_out, guests) = match validate_checkout(&body) {
        Ok(v) => v,
        Err(msg) => return HttpResponse::BadRequest().json(json!({"error": msg})),
    };

    let id = ids::new_booking_id();
    let booking = db::NewBooking {
        id: &id,
        user_id: Some(body.user_id.as_deref().unwrap_or("guest")),
        hotel_id: Some(body.hotel_id.as_deref().unwrap_or("unknown-hotel")),
        check_in,
        check_out,
        guests,
        amount: body.amount,
        name: body.name.as_deref(),
        email: body.email.as_deref(),
        phone: body.phone.as_deref(),
        room_type: None,
        notes: None,
    };

    if let Err(e) = db::insert_booking(&state.pool, &booking).await {
        log::error!("POST /api/booking insert error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Failed to create"}));
    }

    HttpResponse::Ok().json(json!({
        "bookingId": id,
        "amount": body.amount,
        "status": BookingStatus::Pending,
    }))
}

async fn create_enquiry(state: &AppState, body: EnquiryBooking) -> HttpResponse {
    let (check_in, check_out) = match validate_enquiry(&body) {
        Ok(v) => v,
        Err(msg) => return HttpResponse::BadRequest().json(json!({"error": msg})),
    };

    let id = ids::new_booking_id();
    let email = body.email.trim().to_lowercase();
    let booking = db::NewBooking {
        id: &id,
        user_id: None,
        hotel_id: None,
        check_in,
        check_out,
        guests: body.guests,
        amount: 0.0,
        name: Some(body.name.trim()),
        email: Some(&email),
        phone: Some(body.phone.trim()),
        room_type: body.room_type.as_deref(),
        notes: body.notes.as_deref(),
    };

    if let Err(e) = db::insert_booking(&state.pool, &booking).await {
        log::error!("POST /api/booking insert error: {e}");
        return HttpResponse::InternalServerError().json(json!({"error": "Failed to create"}));
    }

    // Echo the stored row, timestamps included.
    match db::get_booking(&state.pool, &id).await {
        Ok(Some(stored)) => HttpResponse::Ok().json(json!({"ok": true, "booking": stored})),
        Ok(None) => {
            log::error!("POST /api/booking: inserted booking {id} not found");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to create"}))
        }
        Err(e) => {
            log::error!("POST /api/booking reload error: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to create"}))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    NotFound,
    AlreadyConfirmed,
    NoSuccessfulPayment,
    Confirm,
}

/// Decision half of the guarded PENDING -> CONFIRMED transition: the
/// booking must exist and have a SUCCESS payment row; repeats are
/// idempotent.
pub fn confirm_outcome(
    status: Option<BookingStatus>,
    has_success_payment: bool,
) -> ConfirmOutcome {
    match status {
        None => ConfirmOutcome::NotFound,
        Some(BookingStatus::Confirmed) => ConfirmOutcome::AlreadyConfirmed,
        Some(BookingStatus::Pending) if has_success_payment => ConfirmOutcome::Confirm,
        Some(BookingStatus::Pending) => ConfirmOutcome::NoSuccessfulPayment,
    }
}

#[utoipa::path(
    put,
    path = "/api/booking/{booking_id}/confirmPayment",
    tag = "bookings",
    params(("booking_id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking confirmed"),
        (status = 404, description = "Unknown booking"),
        (status = 409, description = "No successful payment for the booking"),
        (status = 500, description = "Server error")
    )
)]
#[put("/api/booking/{booking_id}/confirmPayment")]
pub async fn confirm_payment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let booking_id = path.into_inner();

    let status = match db::get_booking(&state.pool, &booking_id).await {
        Ok(b) => b.map(|b| b.status),
        Err(e) => {
            log::error!("confirmPayment load error: {e}");
            return HttpResponse::InternalServerError().json(json!({"error": "Failed to confirm"}));
        }
    };

    let has_success_payment = if status == Some(BookingStatus::Pending) {
        match db::has_successful_payment(&state.pool, &booking_id).await {
            Ok(v) => v,
            Err(e) => {
                log::error!("confirmPayment payment check error: {e}");
                return HttpResponse::InternalServerError()
                    .json(json!({"error": "Failed to confirm"}));
            }
        }
    } else {
        false
    };

    match confirm_outcome(status, has_success_payment) {
        ConfirmOutcome::NotFound => {
            HttpResponse::NotFound().json(json!({"error": "Booking not found"}))
        }
        ConfirmOutcome::NoSuccessfulPayment => {
            HttpResponse::Conflict().json(json!({"error": "No successful payment for booking"}))
        }
        ConfirmOutcome::AlreadyConfirmed => HttpResponse::Ok().json(json!({
            "bookingId": booking_id,
            "status": BookingStatus::Confirmed,
        })),
        ConfirmOutcome::Confirm => {
            if let Err(e) = db::confirm_booking(&state.pool, &booking_id).await {
                log::error!("confirmPayment update error: {e}");
                return HttpResponse::InternalServerError()
                    .json(json!({"error": "Failed to confirm"}));
            }
            HttpResponse::Ok().json(json!({
                "bookingId": booking_id,
                "status": BookingStatus::Confirmed,
            }))
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub price: f64,
    #[serde(default)]
    pub nights: Option<f64>,
    #[serde(default)]
    pub guests: Option<i32>,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/booking/summary",
    tag = "bookings",
    request_body = SummaryRequest,
    responses((status = 200, description = "Fare breakdown", body = crate::pricing::Summary))
)]
#[post("/api/booking/summary")]
pub async fn booking_summary(payload: web::Json<SummaryRequest>) -> impl Responder {
    let body = payload.into_inner();
    let summary = pricing::quote(
        body.price,
        body.nights.unwrap_or(1.0),
        body.coupon_code.as_deref(),
    );
    HttpResponse::Ok().json(summary)
}
