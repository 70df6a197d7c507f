use leptos::*;

use super::{
    components::{cards::SummaryCards, filters::FilterBar, table::RecordsTable},
    view_model::use_reports_view_model,
};
use crate::components::error::InlineErrorMessage;

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let vm = use_reports_view_model();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-gray-100 py-6 px-4 md:px-6">
            <div class="max-w-6xl mx-auto space-y-6">
                <div>
                    <h1 class="text-2xl md:text-4xl font-bold text-gray-800 mb-1">
                        "Salary & Attendance Dashboard"
                    </h1>
                    <p class="text-gray-500 text-sm md:text-base">
                        "Track your salary, overtime, and attendance records"
                    </p>
                </div>
                <SummaryCards vm=vm />
                <InlineErrorMessage error=vm.error.into() />
                <FilterBar vm=vm />
                <RecordsTable vm=vm />
            </div>
        </div>
    }
}
