use leptos::*;
use web_sys::HtmlInputElement;

use crate::pages::login::{
    utils::{can_resend, VerificationChannel, OTP_LEN},
    view_model::LoginViewModel,
};

#[component]
pub fn OtpForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.pending();

    // One node ref per slot: focus moves are addressed by index, never by
    // walking the DOM.
    let field_refs: [NodeRef<html::Input>; OTP_LEN] = std::array::from_fn(|_| create_node_ref());

    create_effect(move |_| {
        if let Some(index) = vm.focus_request.get() {
            if let Some(field) = field_refs.get(index).and_then(|field_ref| field_ref.get()) {
                let _ = field.focus();
            }
            vm.focus_request.set(None);
        }
    });

    let sent_to = move || match vm.channel.get() {
        Some(VerificationChannel::Mobile) => vm.mobile.get(),
        _ => vm.email.get(),
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_otp();
    };

    view! {
        <div class="text-center mb-6">
            <h2 class="text-2xl sm:text-3xl font-bold text-gray-800 mb-2">"Enter OTP"</h2>
            <p class="text-gray-600 text-sm sm:text-base">"Code sent to " {sent_to}</p>
        </div>
        <form on:submit=handle_submit>
            <div class="flex justify-center gap-2 sm:gap-3 mb-6">
                {field_refs
                    .iter()
                    .enumerate()
                    .map(|(index, field_ref)| {
                        let field_ref = *field_ref;
                        view! {
                            <input
                                node_ref=field_ref
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength="1"
                                prop:value=move || vm.otp.get().slot(index)
                                disabled=move || pending.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    vm.otp_field_input(index, &target.value());
                                    // rejected input must not stick in the DOM field
                                    target.set_value(&vm.otp.get_untracked().slot(index));
                                }
                                on:keydown=move |ev| {
                                    if ev.key() == "Backspace" {
                                        vm.otp_field_backspace(index);
                                    }
                                }
                                class="w-10 h-12 sm:w-12 sm:h-14 text-center text-xl sm:text-2xl font-bold border-2 border-gray-300 rounded-lg focus:border-purple-500 focus:outline-none transition-colors disabled:bg-gray-100"
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="space-y-3">
                <button
                    type="submit"
                    disabled=move || pending.get() || vm.otp.get().code().is_none()
                    class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-bold rounded-xl text-white bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-purple-500 disabled:opacity-50"
                >
                    {move || if pending.get() { "Verifying..." } else { "Verify OTP" }}
                </button>
                <div class="text-center">
                    <Show
                        when=move || can_resend(vm.countdown.get())
                        fallback=move || {
                            view! {
                                <p class="text-gray-600 text-sm">
                                    "Resend OTP in "
                                    <span class="font-bold text-purple-600">
                                        {move || vm.countdown.get()} "s"
                                    </span>
                                </p>
                            }
                        }
                    >
                        <button
                            type="button"
                            disabled=move || pending.get()
                            on:click=move |_| vm.resend()
                            class="text-sm font-bold text-purple-600 hover:text-purple-800 disabled:opacity-50"
                        >
                            "Resend OTP"
                        </button>
                    </Show>
                </div>
                <button
                    type="button"
                    disabled=move || pending.get()
                    on:click=move |_| vm.reset()
                    class="w-full text-sm text-gray-500 hover:text-gray-700 py-2 disabled:opacity-50"
                >
                    "Back to Login"
                </button>
            </div>
        </form>
    }
}
