#![cfg(not(coverage))]

use super::*;
use crate::utils::{cookie, nav, storage};
use httpmock::prelude::*;
use serde_json::json;

fn user_json(role: &str) -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Alice Example",
        "email": "alice@example.com",
        "role": role
    })
}

fn record_json(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "status": "Present",
        "checkIn": "09:00",
        "checkOut": "18:00",
        "hoursWorked": 8.0,
        "overtime": 1.0,
        "dailyPay": 1280.0,
        "otPay": 240.0
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn reset_client_side_state() {
    cookie::remove(cookie::TOKEN_COOKIE);
    storage::clear();
    nav::reset();
}

#[tokio::test]
async fn login_returns_direct_token_and_user() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200)
            .json_body(json!({ "token": "t-1", "user": user_json("admin") }));
    });

    let response = api_client(&server)
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert!(!response.otp_verification_required);
    assert!(!response.email_verification_required);
    assert_eq!(response.token.as_deref(), Some("t-1"));
    assert_eq!(response.user.unwrap().role, "admin");
}

#[tokio::test]
async fn login_surfaces_server_error_message() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(400)
            .json_body(json!({ "error": "Invalid credentials" }));
    });

    let err = api_client(&server)
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Invalid credentials");
    assert_eq!(err.code, "REQUEST_FAILED");
    // A plain request failure must not touch the session.
    assert!(nav::last_assigned().is_none());
}

#[tokio::test]
async fn otp_step_up_endpoints_roundtrip() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/verify/mobile");
        then.status(200).json_body(json!({ "status": true }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/verify/email");
        then.status(200).json_body(json!({ "status": true }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/verify/otp");
        then.status(200)
            .json_body(json!({ "success": true, "token": "t-2", "user": user_json("employee") }));
    });

    let api = api_client(&server);
    assert!(api
        .request_mobile_otp(&VerifyMobileRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
            mobile: "5551234567".into(),
        })
        .await
        .unwrap()
        .status);
    assert!(api
        .request_email_otp(&VerifyEmailRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap()
        .status);

    let verified = api
        .verify_otp(&VerifyOtpRequest {
            email: "alice@example.com".into(),
            otp: "123456".into(),
        })
        .await
        .unwrap();
    assert!(verified.success);
    assert_eq!(verified.token.as_deref(), Some("t-2"));
}

#[tokio::test]
async fn bearer_and_language_headers_are_attached() {
    reset_client_side_state();
    cookie::set(cookie::TOKEN_COOKIE, "t-99", 7).unwrap();
    storage::set_item(storage::LANGUAGE_KEY, "de").unwrap();

    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/profile")
            .header("authorization", "Bearer t-99")
            .header("accept-language", "de");
        then.status(200).json_body(json!({
            "success": true,
            "profile": { "name": "Alice Example", "email": "alice@example.com" }
        }));
    });

    let profile = api_client(&server).get_profile().await.unwrap();
    assert_eq!(profile.profile.name, "Alice Example");
    mock.assert();
}

#[tokio::test]
async fn language_header_defaults_to_en_without_token() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .header("accept-language", "en");
        then.status(200).json_body(json!({ "otp_verification_required": true }));
    });

    let response = api_client(&server)
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(response.otp_verification_required);
    mock.assert();
}

#[tokio::test]
async fn unauthorized_tears_down_session_and_redirects() {
    reset_client_side_state();
    cookie::set(cookie::TOKEN_COOKIE, "stale", 7).unwrap();
    storage::set_item(storage::USER_KEY, r#"{"email":"alice@example.com"}"#).unwrap();
    storage::set_item(storage::LANGUAGE_KEY, "en").unwrap();

    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/profile");
        then.status(401).json_body(json!({ "error": "Unauthorized" }));
    });

    let err = api_client(&server).get_profile().await.unwrap_err();

    // The caller sees only the distinguished result; teardown already ran.
    assert!(err.is_session_expired());
    assert!(cookie::get(cookie::TOKEN_COOKIE).is_none());
    assert!(storage::get_item(storage::USER_KEY).is_none());
    assert!(storage::get_item(storage::LANGUAGE_KEY).is_none());
    assert_eq!(nav::last_assigned().as_deref(), Some("/login"));
}

#[tokio::test]
async fn salary_attendance_passes_filter_query() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/salary-attendance")
            .query_param("month", "01")
            .query_param("year", "2026");
        then.status(200).json_body(json!({
            "success": true,
            "records": [record_json("2026-01-05"), record_json("2026-01-06")]
        }));
    });

    let response = api_client(&server)
        .get_salary_attendance(&[
            ("month".to_string(), "01".to_string()),
            ("year".to_string(), "2026".to_string()),
        ])
        .await
        .unwrap();
    assert_eq!(response.records.len(), 2);
    assert_eq!(response.records[0].hours_worked, 8.0);
    mock.assert();
}

#[tokio::test]
async fn salary_details_roundtrip() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/salary/GetSalaryDetails");
        then.status(200).json_body(json!({
            "success": true,
            "salary": { "base_salary_per_hour": 160.0, "overtime_salary_per_hour": 240.0 }
        }));
    });

    let response = api_client(&server).get_salary_details().await.unwrap();
    assert_eq!(response.salary.base_salary_per_hour, 160.0);
    assert_eq!(response.salary.overtime_salary_per_hour, 240.0);
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    reset_client_side_state();
    // Reserved port with nothing listening: connection refused, no response.
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = api.get_profile().await.unwrap_err();
    assert_eq!(err.code, "NETWORK_ERROR");
    assert_eq!(err.error, "Unable to connect to the server.");
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    reset_client_side_state();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/profile");
        then.status(500).body("<html>oops</html>");
    });

    let err = api_client(&server).get_profile().await.unwrap_err();
    assert_eq!(err.error, "Something went wrong");
    assert_eq!(err.code, "REQUEST_FAILED");
}
