use leptos::*;

use crate::{
    state::session::{clear_session, use_session},
    utils::nav,
};

/// Account overview behind the guard: who is signed in, with which role, and
/// the way out.
#[component]
pub fn AccountPanel() -> impl IntoView {
    let (session, set_session) = use_session();

    let name = move || {
        session
            .get()
            .user()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };
    let email = move || {
        session
            .get()
            .user()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    };
    let role = move || {
        session
            .get()
            .role()
            .map(str::to_string)
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        clear_session(set_session);
        nav::assign("/login");
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-3xl md:text-4xl font-bold text-blue-600">"Account"</h1>
            <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-6 text-center space-y-1">
                <p class="text-lg font-bold text-gray-800">{name}</p>
                <p class="text-sm text-gray-500">{email}</p>
                <p class="text-xs uppercase tracking-wider text-gray-400">{role}</p>
            </div>
            <button
                type="button"
                on:click=handle_logout
                class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white text-sm font-bold rounded-lg"
            >
                "Logout"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::AccountPanel;
    use crate::test_support::helpers::{admin_user, provide_session, session_for};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn shows_identity_and_role_from_the_session() {
        let html = render_to_string(move || {
            provide_session(Some(session_for(admin_user())));
            view! { <AccountPanel /> }
        });
        assert!(html.contains("Admin User"));
        assert!(html.contains("admin@example.com"));
        assert!(html.contains("admin"));
        assert!(html.contains("Logout"));
    }
}
