use leptos::*;

use crate::api::ApiError;

pub const OTP_LEN: usize = 6;
pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Linear login flow: credentials, then an optional OTP step-up, then done.
/// `reset` from any non-initial step returns to `Credentials`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Credentials,
    MobileInput,
    OtpVerify,
    Done,
}

/// Channel the one-time password goes out on; resend reuses whichever one the
/// user arrived through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationChannel {
    Email,
    Mobile,
}

/// Result of feeding raw field input into [`OtpDigits::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpInput {
    /// Non-digit input: state untouched.
    Rejected,
    /// Slot updated; `focus` names the field to move to, if any.
    Updated { focus: Option<usize> },
}

/// Fixed-size OTP entry: one slot per digit with explicit focus targets, so
/// the six fields never share mutable DOM state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpDigits {
    slots: [Option<char>; OTP_LEN],
}

impl OtpDigits {
    pub fn slot(&self, index: usize) -> String {
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    /// Apply raw input to a slot. Only a single decimal digit lands; clearing
    /// the field empties the slot. The last typed character wins, so
    /// overtyping a filled field replaces it.
    pub fn apply(&mut self, index: usize, raw: &str) -> OtpInput {
        if index >= OTP_LEN {
            return OtpInput::Rejected;
        }
        let Some(ch) = raw.chars().last() else {
            self.slots[index] = None;
            return OtpInput::Updated { focus: None };
        };
        if !ch.is_ascii_digit() {
            return OtpInput::Rejected;
        }
        self.slots[index] = Some(ch);
        let focus = (index + 1 < OTP_LEN).then_some(index + 1);
        OtpInput::Updated { focus }
    }

    /// Backspace on an empty slot moves focus back one field.
    pub fn backspace_focus(&self, index: usize) -> Option<usize> {
        let empty = self.slots.get(index).copied().flatten().is_none();
        (empty && index > 0).then_some(index - 1)
    }

    /// The full 6-digit code, or `None` while any slot is empty.
    pub fn code(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}

/// Inline feedback for the flow; an error and a success message never show at
/// the same time.
#[derive(Clone, Copy, Default)]
pub struct MessageState {
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
}

impl MessageState {
    pub fn set_error(&self, err: ApiError) {
        self.error.set(Some(err));
        self.success.set(None);
    }

    pub fn set_success(&self, msg: impl Into<String>) {
        self.success.set(Some(msg.into()));
        self.error.set(None);
    }

    pub fn clear(&self) {
        self.error.set(None);
        self.success.set(None);
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(())
}

pub fn validate_mobile(mobile: &str) -> Result<String, ApiError> {
    let trimmed = mobile.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation("Please enter mobile number"))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn can_resend(countdown: u32) -> bool {
    countdown == 0
}
