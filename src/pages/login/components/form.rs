use leptos::*;
use web_sys::HtmlInputElement;

use crate::pages::login::view_model::LoginViewModel;

#[component]
pub fn CredentialsForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.pending();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_credentials();
    };

    view! {
        <div class="text-center mb-6">
            <h1 class="text-3xl sm:text-4xl font-bold text-gray-800 mb-2">"Welcome Back"</h1>
            <p class="text-gray-600 text-sm sm:text-base">"Sign in to continue"</p>
        </div>
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label for="email" class="sr-only">"Email Address"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    placeholder="Email Address"
                    class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-lg focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                    prop:value=vm.email
                    disabled=move || pending.get()
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        vm.email.set(target.value());
                    }
                />
            </div>
            <div>
                <label for="password" class="sr-only">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required
                    placeholder="Password"
                    class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-lg focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                    prop:value=vm.password
                    disabled=move || pending.get()
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        vm.password.set(target.value());
                    }
                />
            </div>
            <button
                type="submit"
                disabled=move || pending.get()
                class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-bold rounded-xl text-white bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
            >
                {move || if pending.get() { "Signing in..." } else { "Sign In" }}
            </button>
        </form>
    }
}
