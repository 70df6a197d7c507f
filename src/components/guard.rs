use leptos::*;
use leptos_router::{use_location, RouterContext};

use crate::{
    state::session::{persisted_session, use_session, SessionState},
    utils::nav,
};

/// Gate for protected routes: render the wrapped view only while a session
/// exists, otherwise bounce to the login flow.
///
/// Durable storage is re-read on mount and again on every path change, so a
/// session cleared elsewhere (logout in another tab, the 401 teardown) is
/// honored on the very next navigation rather than cached for the app's
/// lifetime.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = use_session();

    // The in-memory state must never outlive the durable one.
    let persisted = persisted_session();
    if session.get_untracked().session != persisted {
        set_session.set(SessionState { session: persisted });
    }

    // The guard sits on the parent route, which survives navigation between
    // its children; repeat the durable-storage check on every path change.
    if use_context::<RouterContext>().is_some() {
        let location = use_location();
        create_isomorphic_effect(move |_| {
            let _ = location.pathname.get();
            let persisted = persisted_session();
            if session.get_untracked().session != persisted {
                set_session.set(SessionState { session: persisted });
            }
        });
    }

    let is_authenticated = create_memo(move |_| session.get().is_authenticated());
    create_effect(move |_| {
        if !session.get().is_authenticated() {
            nav::assign("/login");
        }
    });

    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}
