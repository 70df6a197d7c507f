use leptos::*;
use leptos_meta::Title;

/// Catch-all for unknown routes. Decoration only; the one action is the way
/// back home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - Staffdesk"/>
        <div class="min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-indigo-950 via-purple-950 to-slate-950 text-white px-4">
            <div class="text-center space-y-6">
                <h1 class="text-8xl sm:text-9xl font-extrabold bg-gradient-to-r from-indigo-400 via-purple-400 to-pink-400 bg-clip-text text-transparent animate-pulse">
                    "404"
                </h1>
                <div class="space-y-2">
                    <h2 class="text-2xl sm:text-3xl font-bold">"Page not found"</h2>
                    <p class="text-sm sm:text-base text-gray-300">
                        "The page you are looking for does not exist or has been moved."
                    </p>
                </div>
                <a
                    href="/"
                    class="inline-block px-8 py-3 rounded-xl text-sm font-bold bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 transition-colors"
                >
                    "Back to Dashboard"
                </a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::NotFoundPage;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn renders_message_and_way_home() {
        let html = render_to_string(move || {
            leptos_meta::provide_meta_context();
            view! { <NotFoundPage /> }
        });
        assert!(html.contains("404"));
        assert!(html.contains("Back to Dashboard"));
        assert!(html.contains("href=\"/\""));
    }
}
