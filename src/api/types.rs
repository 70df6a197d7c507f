use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` outcome. At most one of the step-up flags is set; when
/// neither is, `token` and `user` carry a directly issued session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub otp_verification_required: bool,
    #[serde(default)]
    pub email_verification_required: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyMobileRequest {
    pub email: String,
    pub password: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendOtpResponse {
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryResponse {
    #[serde(default)]
    pub success: bool,
    pub salary: SalaryDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    pub base_salary_per_hour: f64,
    pub overtime_salary_per_hour: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryAttendanceResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// One row of the salary/attendance report. The service speaks camelCase here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub overtime: f64,
    #[serde(default)]
    pub daily_pay: f64,
    #[serde(default)]
    pub ot_pay: f64,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn network() -> Self {
        Self {
            error: "Unable to connect to the server.".to_string(),
            code: "NETWORK_ERROR".to_string(),
            details: None,
        }
    }

    pub fn session_expired() -> Self {
        Self {
            error: "Session expired. Please login again.".to_string(),
            code: "SESSION_EXPIRED".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    /// The 401 pipeline already tore the session down and redirected; view
    /// models must not surface this one inline.
    pub fn is_session_expired(&self) -> bool {
        self.code == "SESSION_EXPIRED"
    }

    /// Map a non-success response body to the server's message. The service
    /// uses `error` on auth endpoints and `message` elsewhere.
    pub(crate) fn from_error_body(body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
            })
            .unwrap_or("Something went wrong")
            .to_string();
        Self {
            error: message,
            code: "REQUEST_FAILED".to_string(),
            details: parsed.as_ref().and_then(|v| v.get("details").cloned()),
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("bad input").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::network().code, "NETWORK_ERROR");
        assert_eq!(ApiError::session_expired().code, "SESSION_EXPIRED");
        assert_eq!(ApiError::request_failed("nope").code, "REQUEST_FAILED");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert!(ApiError::session_expired().is_session_expired());
        assert!(!ApiError::network().is_session_expired());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let runtime = leptos::create_runtime();
        let _: View = ApiError::request_failed("request failed").into_view();
        runtime.dispose();
    }

    #[test]
    fn error_body_prefers_error_then_message_then_fallback() {
        let from_error = ApiError::from_error_body(r#"{"error": "Invalid credentials"}"#);
        assert_eq!(from_error.error, "Invalid credentials");
        assert_eq!(from_error.code, "REQUEST_FAILED");

        let from_message = ApiError::from_error_body(r#"{"message": "Quota exceeded"}"#);
        assert_eq!(from_message.error, "Quota exceeded");

        let fallback = ApiError::from_error_body("<html>oops</html>");
        assert_eq!(fallback.error, "Something went wrong");
    }

    #[test]
    fn error_body_carries_details_through() {
        let err = ApiError::from_error_body(r#"{"error": "Validation failed", "details": {"errors": ["email"]}}"#);
        assert!(err.details.is_some());
    }
}
