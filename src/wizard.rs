// src/wizard.rs

//! Pure state machine behind the three-step booking flow:
//! GuestInfo -> Payment -> Confirmed, with a Payment -> GuestInfo back
//! edge and no way out of Confirmed. The hold countdown is client-side
//! cosmetics only; there is no inventory entity and nothing is reserved
//! server-side when it runs out.

use chrono::NaiveDate;

use crate::validate;

pub const DEFAULT_HOLD_SECONDS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GuestInfo,
    Payment,
    Confirmed,
}

#[derive(Debug, Clone, Default)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    WrongStep,
    InvalidName,
    InvalidEmail,
    InvalidPhone,
    InvalidDateRange,
    InvalidCardNumber,
    InvalidCardExpiry,
    InvalidCvv,
    HoldExpired,
}

#[derive(Debug)]
pub struct BookingWizard {
    step: Step,
    hold_seconds: u32,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::with_hold(DEFAULT_HOLD_SECONDS)
    }

    pub fn with_hold(seconds: u32) -> Self {
        Self {
            step: Step::GuestInfo,
            hold_seconds: seconds,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn hold_seconds(&self) -> u32 {
        self.hold_seconds
    }

    pub fn hold_expired(&self) -> bool {
        self.hold_seconds == 0
    }

    /// One-second countdown tick. Runs only while on the two
    /// pre-confirmation steps.
    pub fn tick(&mut self) {
        if matches!(self.step, Step::GuestInfo | Step::Payment) && self.hold_seconds > 0 {
            self.hold_seconds -= 1;
        }
    }

    pub fn proceed_to_payment(
        &mut self,
        guest: &GuestDetails,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<(), GuardError> {
        if self.step != Step::GuestInfo {
            return Err(GuardError::WrongStep);
        }
        if !validate::is_name(&guest.name) {
            return Err(GuardError::InvalidName);
        }
        if !validate::is_email(&guest.email) {
            return Err(GuardError::InvalidEmail);
        }
        if !validate::is_phone(&guest.phone) {
            return Err(GuardError::InvalidPhone);
        }
        if check_out <= check_in {
            return Err(GuardError::InvalidDateRange);
        }
        self.step = Step::Payment;
        Ok(())
    }

    pub fn back_to_guest_info(&mut self) -> Result<(), GuardError> {
        if self.step != Step::Payment {
            return Err(GuardError::WrongStep);
        }
        self.step = Step::GuestInfo;
        Ok(())
    }

    pub fn confirm(&mut self, card: &CardDetails) -> Result<(), GuardError> {
        if self.step != Step::Payment {
            return Err(GuardError::WrongStep);
        }
        if self.hold_expired() {
            return Err(GuardError::HoldExpired);
        }
        if !validate::is_card_number(&card.number) {
            return Err(GuardError::InvalidCardNumber);
        }
        if !validate::is_card_expiry(&card.expiry) {
            return Err(GuardError::InvalidCardExpiry);
        }
        if !validate::is_cvv(&card.cvv) {
            return Err(GuardError::InvalidCvv);
        }
        self.step = Step::Confirmed;
        Ok(())
    }
}
