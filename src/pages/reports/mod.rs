use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ReportsPanel;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Title text="Salary & Attendance - Staffdesk"/>
        <ReportsPanel />
    }
}
