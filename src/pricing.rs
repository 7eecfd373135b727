// src/pricing.rs

use serde::Serialize;
use utoipa::ToSchema;

pub const TAX_RATE: f64 = 0.18;

/// Display-only "MRP" markup used for the savings figure. There is no real
/// rate source behind it; it is a merchandising heuristic, not pricing.
const MRP_MARKUP: f64 = 1.05;

#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub base_fare: f64,
    pub taxes_fees: f64,
    pub coupon_discount: f64,
    pub final_total: f64,
    pub savings: f64,
}

fn coupon_discount(base_fare: f64, coupon_code: Option<&str>) -> f64 {
    match coupon_code.map(|c| c.trim().to_uppercase()) {
        Some(code) if code == "SAVE10" => (base_fare * 0.10).round(),
        Some(code) if code == "FLAT200" => 200.0,
        // Unknown codes are ignored, not rejected.
        _ => 0.0,
    }
}

/// Stateless fare breakdown for the booking summary endpoint and the
/// wizard's sidebar. Guests are accepted by the endpoint but do not enter
/// the fare.
pub fn quote(price: f64, nights: f64, coupon_code: Option<&str>) -> Summary {
    let base_fare = (price * nights).max(0.0);
    let taxes_fees = (base_fare * TAX_RATE).round();
    let coupon_discount = coupon_discount(base_fare, coupon_code);
    let subtotal = (base_fare - coupon_discount).max(0.0);
    let final_total = (subtotal + taxes_fees).max(0.0);
    let mrp = (base_fare * MRP_MARKUP).round();
    let savings = (mrp - base_fare).max(0.0) + coupon_discount;
    Summary {
        base_fare,
        taxes_fees,
        coupon_discount,
        final_total,
        savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save10_on_one_night() {
        let s = quote(1000.0, 1.0, Some("SAVE10"));
        assert_eq!(s.base_fare, 1000.0);
        assert_eq!(s.coupon_discount, 100.0);
        assert_eq!(s.taxes_fees, 180.0);
        assert_eq!(s.final_total, 1080.0);
    }

    #[test]
    fn flat200_can_zero_the_subtotal_but_taxes_remain() {
        let s = quote(100.0, 1.0, Some("FLAT200"));
        assert_eq!(s.coupon_discount, 200.0);
        assert_eq!(s.taxes_fees, 18.0);
        // subtotal clamps at 0, so only taxes survive
        assert_eq!(s.final_total, 18.0);
    }

    #[test]
    fn unknown_coupon_matches_no_coupon() {
        let with_bad_code = quote(2500.0, 3.0, Some("NOPE42"));
        let without = quote(2500.0, 3.0, None);
        assert_eq!(with_bad_code, without);
        assert_eq!(with_bad_code.coupon_discount, 0.0);
    }

    #[test]
    fn coupon_codes_are_case_insensitive() {
        assert_eq!(quote(1000.0, 1.0, Some("save10")).coupon_discount, 100.0);
        assert_eq!(quote(1000.0, 1.0, Some(" flat200 ")).coupon_discount, 200.0);
    }

    #[test]
    fn total_identity_holds_for_valid_inputs() {
        for &(price, nights) in &[(0.0, 1.0), (999.0, 2.0), (12999.0, 7.0), (1.0, 1.0)] {
            let s = quote(price, nights, None);
            let base = (price * nights).max(0.0);
            assert_eq!(s.final_total, base.round() - s.coupon_discount + (base * TAX_RATE).round());
            assert!(s.final_total >= 0.0);
        }
    }

    #[test]
    fn negative_price_clamps_to_zero_fare() {
        let s = quote(-500.0, 2.0, None);
        assert_eq!(s.base_fare, 0.0);
        assert_eq!(s.final_total, 0.0);
    }
}
