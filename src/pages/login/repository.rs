use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, LoginRequest, LoginResponse, SendOtpResponse, VerifyEmailRequest,
    VerifyMobileRequest, VerifyOtpRequest, VerifyOtpResponse,
};

#[derive(Clone)]
pub struct LoginRepository {
    api: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    pub async fn send_mobile_otp(
        &self,
        email: &str,
        password: &str,
        mobile: &str,
    ) -> Result<SendOtpResponse, ApiError> {
        self.api
            .request_mobile_otp(&VerifyMobileRequest {
                email: email.to_string(),
                password: password.to_string(),
                mobile: mobile.to_string(),
            })
            .await
    }

    pub async fn send_email_otp(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SendOtpResponse, ApiError> {
        self.api
            .request_email_otp(&VerifyEmailRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifyOtpResponse, ApiError> {
        self.api
            .verify_otp(&VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            })
            .await
    }
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}
