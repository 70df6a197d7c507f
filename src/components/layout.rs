use leptos::*;
use leptos_router::{use_location, Outlet};

/// Routes whose view manages its own spacing edge to edge.
const FULL_BLEED_ROUTE_PATHS: &[&str] = &["/"];

/// Routes that keep the plain account background instead of the report
/// gradient.
const PLAIN_BG_ROUTE_PATHS: &[&str] = &["/dashboard"];

fn padding_class(path: &str) -> &'static str {
    if FULL_BLEED_ROUTE_PATHS.contains(&path) {
        "p-0 m-0 max-w-none"
    } else {
        "px-2 sm:px-4 md:px-8 py-2 sm:py-4"
    }
}

fn background_class(path: &str) -> &'static str {
    if PLAIN_BG_ROUTE_PATHS.contains(&path) {
        "bg-gray-100"
    } else {
        "bg-[linear-gradient(to_right,#CFDEF3,#E0EAFC)]"
    }
}

/// Shell around every protected view: the nested route renders into the
/// outlet, and the main region is restyled per route group.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    let main_class = move || {
        let path = location.pathname.get();
        format!(
            "flex-1 w-full overflow-auto {} {}",
            padding_class(&path),
            background_class(&path)
        )
    };
    view! {
        <div class="flex flex-col min-h-screen w-full bg-background">
            <main class=main_class>
                <Outlet/>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_loading_spinner() {
        let html = render_to_string(move || view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
    }
}
