use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health,
        crate::api::contact::submit_contact,
        crate::api::chat::chat_reply,
        crate::api::profile::get_profile,
        crate::api::bookings::list_bookings,
        crate::api::bookings::create_booking,
        crate::api::bookings::confirm_payment,
        crate::api::bookings::booking_summary,
        crate::api::payments::charge_card,
        crate::api::payments::generate_qr,
        crate::api::payments::payment_status
    ),
    components(
        schemas(
            crate::api::contact::ContactRequest,
            crate::api::chat::ChatRequest,
            crate::api::chat::ChatMessage,
            crate::api::profile::Profile,
            crate::api::bookings::CreateBookingRequest,
            crate::api::bookings::CheckoutBooking,
            crate::api::bookings::EnquiryBooking,
            crate::api::bookings::SummaryRequest,
            crate::api::payments::CardChargeRequest,
            crate::pricing::Summary
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "contact", description = "Contact form"),
        (name = "chat", description = "Concierge chat echo"),
        (name = "profile", description = "Demo profile autofill"),
        (name = "bookings", description = "Booking records, confirmation, pricing summary"),
        (name = "payments", description = "Payment stubs: card charge, QR, status lookup")
    )
)]
pub struct ApiDoc;
