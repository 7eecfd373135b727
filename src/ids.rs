// src/ids.rs

//! Timestamp-derived identifiers, kept wire-compatible with the previous
//! deployment: base36 of the current unix millis under a type prefix.

use chrono::Utc;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

fn now_base36() -> String {
    to_base36(Utc::now().timestamp_millis().max(0) as u64)
}

pub fn new_booking_id() -> String {
    format!("bkg_{}", now_base36())
}

pub fn new_card_transaction_id() -> String {
    format!("txn_card_{}", now_base36())
}

pub fn new_qr_transaction_id() -> String {
    format!("txn_qr_{}", now_base36())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36), "100");
    }

    #[test]
    fn ids_carry_type_prefixes() {
        assert!(new_booking_id().starts_with("bkg_"));
        assert!(new_card_transaction_id().starts_with("txn_card_"));
        assert!(new_qr_transaction_id().starts_with("txn_qr_"));
    }
}
