use leptos::*;
use leptos_meta::Title;

mod panel;

pub use panel::AccountPanel;

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <Title text="Account - Staffdesk"/>
        <AccountPanel />
    }
}
