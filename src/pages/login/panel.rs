use leptos::*;

use super::{
    components::{form::CredentialsForm, mobile::MobileForm, otp::OtpForm},
    utils::LoginStep,
    view_model::use_login_view_model,
};
use crate::components::{
    error::{InlineErrorMessage, InlineSuccessMessage},
    layout::LoadingSpinner,
};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 via-indigo-50 to-purple-50 px-4 py-8">
            <div class="bg-white p-6 sm:p-8 rounded-2xl shadow-2xl w-full max-w-md">
                <InlineErrorMessage error=vm.messages.error.into() />
                <InlineSuccessMessage message=vm.messages.success.into() />
                {move || match vm.step.get() {
                    LoginStep::Credentials => view! { <CredentialsForm vm=vm /> }.into_view(),
                    LoginStep::MobileInput => view! { <MobileForm vm=vm /> }.into_view(),
                    LoginStep::OtpVerify => view! { <OtpForm vm=vm /> }.into_view(),
                    LoginStep::Done => view! { <DoneNotice /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Shown for the moment between the session write and the redirect; the
/// success message above carries the text.
#[component]
fn DoneNotice() -> impl IntoView {
    view! { <LoadingSpinner /> }
}
