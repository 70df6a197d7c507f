use super::{
    client::ApiClient,
    types::{
        ApiError, LoginRequest, LoginResponse, SendOtpResponse, VerifyEmailRequest,
        VerifyMobileRequest, VerifyOtpRequest, VerifyOtpResponse,
    },
};

impl ApiClient {
    /// `POST /auth/login` — password check. The response decides whether an
    /// OTP step-up is required or a token is issued directly.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }

    /// `POST /auth/verify/mobile` — ask for an OTP to be sent to `mobile`.
    pub async fn request_mobile_otp(
        &self,
        request: &VerifyMobileRequest,
    ) -> Result<SendOtpResponse, ApiError> {
        self.post_json("/auth/verify/mobile", request).await
    }

    /// `POST /auth/verify/email` — ask for an OTP to be sent to the account
    /// email address.
    pub async fn request_email_otp(
        &self,
        request: &VerifyEmailRequest,
    ) -> Result<SendOtpResponse, ApiError> {
        self.post_json("/auth/verify/email", request).await
    }

    /// `POST /auth/verify/otp` — exchange the entered code for a session.
    pub async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, ApiError> {
        self.post_json("/auth/verify/otp", request).await
    }
}
