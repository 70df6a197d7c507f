use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, layout::DashboardLayout},
    pages::{
        account::AccountPage, login::LoginPage, not_found::NotFoundPage, reports::ReportsPage,
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/", "/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/" view=ProtectedShell>
                        <Route path="" view=ReportsPage/>
                        <Route path="dashboard" view=AccountPage/>
                    </Route>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

/// Every protected view sits behind the guard and inside the shared layout;
/// the nested routes render through the layout's outlet.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! { <RequireAuth><DashboardLayout/></RequireAuth> }
}
