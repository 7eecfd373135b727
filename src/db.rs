// src/db.rs

use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{Booking, BookingStatus, Payment, PaymentMethod, PaymentStatus};

pub async fn insert_contact(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: &str,
    description: Option<&str>,
) -> Result<i32, sqlx::Error> {
    let row = sqlx::query(
        r#"INSERT INTO contacts (name, email, phone, description)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

pub struct NewBooking<'a> {
    pub id: &'a str,
    pub user_id: Option<&'a str>,
    pub hotel_id: Option<&'a str>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub amount: f64,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub room_type: Option<&'a str>,
    pub notes: Option<&'a str>,
}

pub async fn insert_booking(pool: &PgPool, booking: &NewBooking<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO bookings
               (id, user_id, hotel_id, check_in, check_out, guests, status, amount,
                name, email, phone, room_type, notes)
           VALUES ($1, $2, $3, $4, $5, $6, 'PENDING', $7, $8, $9, $10, $11, $12)"#,
    )
    .bind(booking.id)
    .bind(booking.user_id)
    .bind(booking.hotel_id)
    .bind(booking.check_in)
    .bind(booking.check_out)
    .bind(booking.guests)
    .bind(booking.amount)
    .bind(booking.name)
    .bind(booking.email)
    .bind(booking.phone)
    .bind(booking.room_type)
    .bind(booking.notes)
    .execute(pool)
    .await?;

    Ok(())
}

fn booking_from_row(r: &PgRow) -> Booking {
    Booking {
        id: r.get("id"),
        user_id: r.get("user_id"),
        hotel_id: r.get("hotel_id"),
        check_in: r.get("check_in"),
        check_out: r.get("check_out"),
        guests: r.get("guests"),
        status: BookingStatus::from(r.get::<String, _>("status")),
        amount: r.get("amount"),
        payment_method: r
            .get::<Option<String>, _>("payment_method")
            .map(PaymentMethod::from),
        transaction_id: r.get("transaction_id"),
        name: r.get("name"),
        email: r.get("email"),
        phone: r.get("phone"),
        room_type: r.get("room_type"),
        notes: r.get("notes"),
        created_at: r.get("created_at"),
    }
}

/// Newest first, capped at 100.
pub async fn list_bookings(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
    let rows = sqlx::query(
        r#"SELECT id, user_id, hotel_id, check_in, check_out, guests, status, amount,
                  payment_method, transaction_id, name, email, phone, room_type, notes,
                  created_at
           FROM bookings
           ORDER BY created_at DESC
           LIMIT 100"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(booking_from_row).collect())
}

pub async fn get_booking(pool: &PgPool, id: &str) -> Result<Option<Booking>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT id, user_id, hotel_id, check_in, check_out, guests, status, amount,
                  payment_method, transaction_id, name, email, phone, room_type, notes,
                  created_at
           FROM bookings
           WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(booking_from_row))
}

pub async fn has_successful_payment(pool: &PgPool, booking_id: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT EXISTS(
               SELECT 1 FROM payments WHERE booking_id = $1 AND status = 'SUCCESS'
           ) AS paid"#,
    )
    .bind(booking_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("paid"))
}

pub async fn confirm_booking(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query(r#"UPDATE bookings SET status = 'CONFIRMED', updated_at = NOW() WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_card_payment(
    pool: &PgPool,
    transaction_id: &str,
    booking_id: &str,
    amount: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO payments (transaction_id, booking_id, method, status, amount)
           VALUES ($1, $2, 'CARD', 'SUCCESS', $3)"#,
    )
    .bind(transaction_id)
    .bind(booking_id)
    .bind(amount)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn upsert_qr_payment(
    pool: &PgPool,
    transaction_id: &str,
    booking_id: &str,
    amount: f64,
    qr_image_url: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO payments (transaction_id, booking_id, method, status, amount, qr_image_url)
           VALUES ($1, $2, 'QR', 'PENDING', $3, $4)
           ON CONFLICT (transaction_id) DO UPDATE SET updated_at = NOW()"#,
    )
    .bind(transaction_id)
    .bind(booking_id)
    .bind(amount)
    .bind(qr_image_url)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn stamp_booking_payment(
    pool: &PgPool,
    booking_id: &str,
    method: PaymentMethod,
    transaction_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"UPDATE bookings
           SET payment_method = $1, transaction_id = $2, updated_at = NOW()
           WHERE id = $3"#,
    )
    .bind(method.as_str())
    .bind(transaction_id)
    .bind(booking_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_payment(
    pool: &PgPool,
    transaction_id: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    let row = sqlx::query(
        r#"SELECT transaction_id, booking_id, method, status, amount, qr_image_url, created_at
           FROM payments
           WHERE transaction_id = $1"#,
    )
    .bind(transaction_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| Payment {
        transaction_id: r.get("transaction_id"),
        booking_id: r.get("booking_id"),
        method: PaymentMethod::from(r.get::<String, _>("method")),
        status: PaymentStatus::from(r.get::<String, _>("status")),
        amount: r.get("amount"),
        qr_image_url: r.get("qr_image_url"),
        created_at: r.get("created_at"),
    }))
}
