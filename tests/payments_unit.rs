use luxurystay_api::api::payments::{
    build_qr_image_url, build_upi_link, QR_EXPIRES_IN_SECONDS,
};

#[test]
fn upi_link_carries_amount_note_and_transaction_ref() {
    let link = build_upi_link(12999.0, "txn_qr_abc123");
    assert!(link.starts_with("upi://pay?pa=merchant@upi&pn=LuxuryStay&"));
    assert!(link.contains("am=12999"));
    assert!(link.contains("tn=LuxuryStay%20Booking"));
    assert!(link.ends_with("tr=txn_qr_abc123"));
}

#[test]
fn fractional_amounts_survive_encoding() {
    let link = build_upi_link(499.5, "txn_qr_x");
    assert!(link.contains("am=499.5"));
}

#[test]
fn qr_image_url_embeds_the_escaped_deep_link() {
    let link = build_upi_link(100.0, "txn_qr_x");
    let url = build_qr_image_url(&link);
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=300x300&data="));
    assert!(url.contains("upi%3A%2F%2Fpay"));
    // The deep link's own '&' separators must not leak into the outer URL.
    assert_eq!(url.matches('&').count(), 1);
}

#[test]
fn qr_expiry_hint_is_five_minutes() {
    assert_eq!(QR_EXPIRES_IN_SECONDS, 300);
}
