use chrono::NaiveDate;

use luxurystay_api::wizard::{
    BookingWizard, CardDetails, GuardError, GuestDetails, Step, DEFAULT_HOLD_SECONDS,
};

fn valid_guest() -> GuestDetails {
    GuestDetails {
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        phone: "+919876543210".into(),
    }
}

fn valid_card() -> CardDetails {
    CardDetails {
        number: "4111 1111 1111 1111".into(),
        expiry: "09/27".into(),
        cvv: "123".into(),
    }
}

fn dates() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
    )
}

#[test]
fn happy_path_runs_linearly_to_confirmed() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::new();
    assert_eq!(w.step(), Step::GuestInfo);
    assert_eq!(w.hold_seconds(), DEFAULT_HOLD_SECONDS);

    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();
    assert_eq!(w.step(), Step::Payment);

    w.confirm(&valid_card()).unwrap();
    assert_eq!(w.step(), Step::Confirmed);
}

#[test]
fn invalid_guest_fields_block_the_first_transition() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::new();

    let mut guest = valid_guest();
    guest.phone = "12345".into();
    assert_eq!(
        w.proceed_to_payment(&guest, check_in, check_out),
        Err(GuardError::InvalidPhone)
    );
    assert_eq!(w.step(), Step::GuestInfo);
}

#[test]
fn check_out_must_be_strictly_after_check_in() {
    let (check_in, _) = dates();
    let mut w = BookingWizard::new();
    assert_eq!(
        w.proceed_to_payment(&valid_guest(), check_in, check_in),
        Err(GuardError::InvalidDateRange)
    );
}

#[test]
fn payment_step_has_a_back_edge_but_confirmed_does_not() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::new();

    assert_eq!(w.back_to_guest_info(), Err(GuardError::WrongStep));

    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();
    w.back_to_guest_info().unwrap();
    assert_eq!(w.step(), Step::GuestInfo);

    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();
    w.confirm(&valid_card()).unwrap();
    assert_eq!(w.back_to_guest_info(), Err(GuardError::WrongStep));
    assert_eq!(
        w.proceed_to_payment(&valid_guest(), check_in, check_out),
        Err(GuardError::WrongStep)
    );
}

#[test]
fn bad_card_fields_are_reported_individually() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::new();
    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();

    let mut card = valid_card();
    card.expiry = "13/27".into();
    assert_eq!(w.confirm(&card), Err(GuardError::InvalidCardExpiry));

    card = valid_card();
    card.cvv = "12".into();
    assert_eq!(w.confirm(&card), Err(GuardError::InvalidCvv));
    assert_eq!(w.step(), Step::Payment);
}

#[test]
fn expired_hold_disables_confirmation() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::with_hold(2);
    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();

    w.tick();
    w.tick();
    assert!(w.hold_expired());
    // Ticking past zero stays at zero.
    w.tick();
    assert_eq!(w.hold_seconds(), 0);

    assert_eq!(w.confirm(&valid_card()), Err(GuardError::HoldExpired));
    assert_eq!(w.step(), Step::Payment);
}

#[test]
fn countdown_stops_once_confirmed() {
    let (check_in, check_out) = dates();
    let mut w = BookingWizard::with_hold(10);
    w.proceed_to_payment(&valid_guest(), check_in, check_out)
        .unwrap();
    w.confirm(&valid_card()).unwrap();

    w.tick();
    assert_eq!(w.hold_seconds(), 10);
}
