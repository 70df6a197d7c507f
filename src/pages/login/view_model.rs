use std::rc::Rc;

use leptos::*;
use log::info;

use super::{
    repository::LoginRepository,
    utils::{
        can_resend, validate_credentials, validate_mobile, LoginStep, MessageState, OtpDigits,
        OtpInput, VerificationChannel, RESEND_COOLDOWN_SECS,
    },
};
use crate::{
    api::{ApiClient, ApiError, LoginResponse, SendOtpResponse, VerifyOtpResponse},
    state::session::{establish_session, use_session, Session, SessionState},
    utils::nav,
};

#[cfg(target_arch = "wasm32")]
type CountdownTicker = gloo_timers::callback::Interval;
#[cfg(not(target_arch = "wasm32"))]
type CountdownTicker = ();

/// State and transitions of the login flow. The panel only renders signals and
/// forwards user intent to the methods below; every transition lives here.
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub step: RwSignal<LoginStep>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub mobile: RwSignal<String>,
    pub otp: RwSignal<OtpDigits>,
    /// Index of the OTP field that should grab focus next; the panel consumes
    /// and clears it.
    pub focus_request: RwSignal<Option<usize>>,
    pub channel: RwSignal<Option<VerificationChannel>>,
    pub countdown: RwSignal<u32>,
    pub messages: MessageState,
    pub login_action: Action<(), Result<LoginResponse, ApiError>>,
    pub send_otp_action:
        Action<VerificationChannel, (VerificationChannel, Result<SendOtpResponse, ApiError>)>,
    pub verify_action: Action<String, Result<VerifyOtpResponse, ApiError>>,
    session_writer: WriteSignal<SessionState>,
    ticker: StoredValue<Option<CountdownTicker>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let (_session, session_writer) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));

    let step = create_rw_signal(LoginStep::default());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let mobile = create_rw_signal(String::new());
    let otp = create_rw_signal(OtpDigits::default());
    let focus_request = create_rw_signal(None::<usize>);
    let channel = create_rw_signal(None::<VerificationChannel>);
    let countdown = create_rw_signal(RESEND_COOLDOWN_SECS);
    let messages = MessageState::default();
    let ticker = store_value(None::<CountdownTicker>);

    let repo_for_login = repository.clone();
    let login_action = create_action(move |_: &()| {
        let repo = repo_for_login.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();
        async move { repo.login(&email, &password).await }
    });

    let repo_for_send = repository.clone();
    let send_otp_action = create_action(move |requested: &VerificationChannel| {
        let repo = repo_for_send.clone();
        let requested = *requested;
        let email = email.get_untracked();
        let password = password.get_untracked();
        let mobile = mobile.get_untracked();
        async move {
            let result = match requested {
                VerificationChannel::Mobile => {
                    repo.send_mobile_otp(&email, &password, &mobile).await
                }
                VerificationChannel::Email => repo.send_email_otp(&email, &password).await,
            };
            (requested, result)
        }
    });

    let verify_action = create_action(move |code: &String| {
        let repo = repository.clone();
        let email = email.get_untracked();
        let code = code.clone();
        async move { repo.verify_otp(&email, &code).await }
    });

    let vm = LoginViewModel {
        step,
        email,
        password,
        mobile,
        otp,
        focus_request,
        channel,
        countdown,
        messages,
        login_action,
        send_otp_action,
        verify_action,
        session_writer,
        ticker,
    };

    // Isomorphic so the same wiring drives the host-side tests.
    create_isomorphic_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            vm.on_login_result(result);
        }
    });

    create_isomorphic_effect(move |_| {
        if let Some((requested, result)) = send_otp_action.value().get() {
            vm.on_send_otp_result(requested, result);
        }
    });

    create_isomorphic_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            vm.on_verify_result(result);
        }
    });

    // A timer surviving the page would keep mutating disposed signals.
    on_cleanup(move || ticker.set_value(None));

    vm
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        let login = self.login_action.pending();
        let send = self.send_otp_action.pending();
        let verify = self.verify_action.pending();
        Signal::derive(move || login.get() || send.get() || verify.get())
    }

    /// Submit the credentials form. One request per user action; validation
    /// failures never leave the client.
    pub fn submit_credentials(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        if let Err(err) = validate_credentials(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
        ) {
            self.messages.set_error(err);
            return;
        }
        self.messages.clear();
        self.login_action.dispatch(());
    }

    /// Submit the mobile number and ask for an OTP on that channel.
    pub fn submit_mobile(&self) {
        if self.send_otp_action.pending().get_untracked() {
            return;
        }
        if let Err(err) = validate_mobile(&self.mobile.get_untracked()) {
            self.messages.set_error(err);
            return;
        }
        self.messages.clear();
        self.send_otp_action.dispatch(VerificationChannel::Mobile);
    }

    /// Submit the entered code. An incomplete code is rejected locally.
    pub fn submit_otp(&self) {
        if self.verify_action.pending().get_untracked() {
            return;
        }
        let Some(code) = self.otp.get_untracked().code() else {
            self.messages
                .set_error(ApiError::validation("Please enter complete OTP"));
            return;
        };
        self.messages.clear();
        self.verify_action.dispatch(code);
    }

    /// Re-issue the OTP on the active channel once the cooldown has elapsed.
    pub fn resend(&self) {
        if !can_resend(self.countdown.get_untracked()) {
            return;
        }
        let Some(channel) = self.channel.get_untracked() else {
            return;
        };
        self.messages.clear();
        self.send_otp_action.dispatch(channel);
    }

    pub fn otp_field_input(&self, index: usize, raw: &str) {
        let mut digits = self.otp.get_untracked();
        match digits.apply(index, raw) {
            OtpInput::Rejected => {}
            OtpInput::Updated { focus } => {
                self.otp.set(digits);
                if focus.is_some() {
                    self.focus_request.set(focus);
                }
            }
        }
    }

    pub fn otp_field_backspace(&self, index: usize) {
        if let Some(prev) = self.otp.get_untracked().backspace_focus(index) {
            self.focus_request.set(Some(prev));
        }
    }

    /// Back to the credentials step from anywhere, discarding everything the
    /// step-up collected.
    pub fn reset(&self) {
        self.stop_countdown();
        self.step.set(LoginStep::Credentials);
        self.mobile.set(String::new());
        self.otp.update(|digits| digits.clear());
        self.focus_request.set(None);
        self.channel.set(None);
        self.countdown.set(RESEND_COOLDOWN_SECS);
        self.messages.clear();
    }

    fn on_login_result(&self, result: Result<LoginResponse, ApiError>) {
        match result {
            Ok(response) => {
                if response.otp_verification_required {
                    self.channel.set(Some(VerificationChannel::Mobile));
                    self.step.set(LoginStep::MobileInput);
                    self.messages
                        .set_success("Please enter your mobile number for OTP verification");
                } else if response.email_verification_required {
                    self.channel.set(Some(VerificationChannel::Email));
                    self.send_otp_action.dispatch(VerificationChannel::Email);
                } else if let Some(token) = response.token {
                    self.finish_login(token, response.user);
                } else {
                    self.messages
                        .set_error(ApiError::unknown("Login failed. Please try again."));
                }
            }
            Err(err) => self.surface_error(err),
        }
    }

    fn on_send_otp_result(
        &self,
        requested: VerificationChannel,
        result: Result<SendOtpResponse, ApiError>,
    ) {
        match result {
            Ok(response) if response.status => {
                self.messages.set_success(match requested {
                    VerificationChannel::Mobile => "OTP sent to your mobile number",
                    VerificationChannel::Email => "OTP sent to your email address",
                });
                self.step.set(LoginStep::OtpVerify);
                self.start_countdown();
            }
            Ok(_) => self
                .messages
                .set_error(ApiError::request_failed("Failed to send OTP")),
            Err(err) => self.surface_error(err),
        }
    }

    fn on_verify_result(&self, result: Result<VerifyOtpResponse, ApiError>) {
        match result {
            Ok(response) if response.success && response.token.is_some() => {
                let token = response.token.unwrap_or_default();
                self.finish_login(token, response.user);
            }
            Ok(_) => self.reject_otp(ApiError::request_failed("Invalid OTP. Please try again.")),
            Err(err) => {
                if err.is_session_expired() {
                    return;
                }
                self.reject_otp(err);
            }
        }
    }

    /// The server rejected the code: wipe the fields, hand focus back to the
    /// first one and stay on this step.
    fn reject_otp(&self, err: ApiError) {
        self.otp.update(|digits| digits.clear());
        self.focus_request.set(Some(0));
        self.messages.set_error(err);
    }

    /// Exactly one session-populating write per successful authentication.
    fn finish_login(&self, token: String, user: Option<crate::api::UserProfile>) {
        let Some(user) = user else {
            self.messages
                .set_error(ApiError::unknown("Login failed. Please try again."));
            return;
        };
        if let Err(err) = establish_session(self.session_writer, Session { token, user }) {
            self.messages.set_error(ApiError::unknown(err));
            return;
        }
        self.stop_countdown();
        self.step.set(LoginStep::Done);
        self.messages.set_success("Login successful! Redirecting...");
        info!("login complete, redirecting to the dashboard");
        redirect_after_delay();
    }

    fn surface_error(&self, err: ApiError) {
        // SESSION_EXPIRED already redirected; nothing to show here.
        if err.is_session_expired() {
            return;
        }
        self.messages.set_error(err);
    }

    fn start_countdown(&self) {
        self.countdown.set(RESEND_COOLDOWN_SECS);
        #[cfg(target_arch = "wasm32")]
        {
            let countdown = self.countdown;
            self.ticker
                .set_value(Some(gloo_timers::callback::Interval::new(1000, move || {
                    countdown.update(|secs| *secs = secs.saturating_sub(1));
                })));
        }
    }

    fn stop_countdown(&self) {
        // Dropping the interval cancels it.
        self.ticker.set_value(None);
    }
}

/// Leave the success message on screen briefly before entering the protected
/// area.
fn redirect_after_delay() {
    #[cfg(target_arch = "wasm32")]
    {
        use super::utils::REDIRECT_DELAY_MS;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
            nav::assign("/");
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    nav::assign("/");
}
