use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{
    api::UserProfile,
    utils::{cookie, storage},
};

/// Days before the token cookie expires, matching the token lifetime the
/// service issues.
pub const TOKEN_TTL_DAYS: u32 = 7;

/// Authenticated client state: the bearer token plus the identity it belongs
/// to. Persisted as a pair and destroyed as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<&str> {
        self.user().map(|u| u.role.as_str())
    }
}

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Rebuild the session from durable storage. Both halves must be present; a
/// stray token or user record alone counts as no session at all.
pub fn persisted_session() -> Option<Session> {
    let token = cookie::get(cookie::TOKEN_COOKIE)?;
    let user_json = storage::get_item(storage::USER_KEY)?;
    let user: UserProfile = serde_json::from_str(&user_json).ok()?;
    Some(Session { token, user })
}

/// Persist and publish a freshly issued session. On a partial write failure
/// the half already written is rolled back so nothing half-authenticated
/// survives a reload.
pub fn establish_session(
    set_state: WriteSignal<SessionState>,
    session: Session,
) -> Result<(), String> {
    let user_json = serde_json::to_string(&session.user)
        .map_err(|_| "Failed to serialize user profile".to_string())?;
    cookie::set(cookie::TOKEN_COOKIE, &session.token, TOKEN_TTL_DAYS)?;
    if let Err(err) = storage::set_item(storage::USER_KEY, &user_json) {
        cookie::remove(cookie::TOKEN_COOKIE);
        return Err(err);
    }
    set_state.set(SessionState {
        session: Some(session),
    });
    Ok(())
}

/// Logout: token and user record go together.
pub fn clear_session(set_state: WriteSignal<SessionState>) {
    cookie::remove(cookie::TOKEN_COOKIE);
    storage::remove_item(storage::USER_KEY);
    set_state.set(SessionState::default());
}

fn create_session_context() -> SessionContext {
    create_signal(SessionState {
        session: persisted_session(),
    })
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(create_session_context)
}
