use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    let details = e.details.as_ref();
                    if code == "VALIDATION_ERROR" {
                        if let Some(details) = details {
                            if let Some(errors) = details.get("errors").and_then(|v| v.as_array()) {
                                return view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {errors.iter().map(|err| {
                                            view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                        }).collect_view()}
                                    </ul>
                                }.into_view();
                            }
                        }
                    }
                    ().into_view()
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[component]
pub fn InlineSuccessMessage(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Email is required", "Password is required"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Email is required"));
        assert!(html.contains("Password is required"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("font-bold"));
    }

    #[test]
    fn inline_success_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some("OTP sent to your mobile number".to_string()));
            view! { <InlineSuccessMessage message={signal.into()} /> }
        });
        assert!(html.contains("OTP sent to your mobile number"));
    }
}
