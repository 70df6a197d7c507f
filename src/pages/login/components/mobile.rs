use leptos::*;
use web_sys::HtmlInputElement;

use crate::pages::login::view_model::LoginViewModel;

#[component]
pub fn MobileForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.pending();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_mobile();
    };

    view! {
        <div class="text-center mb-6">
            <h2 class="text-2xl sm:text-3xl font-bold text-gray-800 mb-2">"Mobile Verification"</h2>
            <p class="text-gray-600 text-sm sm:text-base">
                "Enter your mobile number to receive OTP"
            </p>
        </div>
        <form class="space-y-3" on:submit=handle_submit>
            <div>
                <label for="mobile" class="sr-only">"Mobile Number"</label>
                <input
                    id="mobile"
                    name="mobile"
                    type="tel"
                    placeholder="Enter 10 digit mobile number"
                    class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-lg focus:outline-none focus:ring-teal-500 focus:border-teal-500 sm:text-sm"
                    prop:value=vm.mobile
                    disabled=move || pending.get()
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        vm.mobile.set(target.value());
                    }
                />
            </div>
            <button
                type="submit"
                disabled=move || pending.get() || vm.mobile.get().trim().is_empty()
                class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-bold rounded-xl text-white bg-gradient-to-r from-emerald-500 to-teal-500 hover:from-emerald-600 hover:to-teal-600 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-emerald-500 disabled:opacity-50"
            >
                {move || if pending.get() { "Sending..." } else { "Send OTP" }}
            </button>
            <button
                type="button"
                disabled=move || pending.get()
                on:click=move |_| vm.reset()
                class="w-full text-sm text-gray-500 hover:text-gray-700 py-2 disabled:opacity-50"
            >
                "Back to Login"
            </button>
        </form>
    }
}
