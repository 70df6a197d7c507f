use leptos::*;

use crate::pages::reports::{
    utils::{format_money, format_rate, monthly_earning},
    view_model::ReportsViewModel,
};

#[component]
pub fn InfoCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let value_class = format!(
        "text-sm md:text-lg font-bold truncate {}",
        accent.unwrap_or("text-gray-800")
    );
    view! {
        <div class="h-full bg-white rounded-lg border border-gray-200 shadow-sm hover:shadow-md transition-shadow p-4">
            <div class="text-[0.625rem] font-bold text-gray-400 uppercase tracking-wider mb-2">
                {title}
            </div>
            {move || {
                if loading.get() {
                    view! { <div class="animate-pulse h-5 w-4/5 bg-gray-200 rounded"></div> }
                        .into_view()
                } else {
                    view! { <div class=value_class.clone()>{value.get()}</div> }.into_view()
                }
            }}
        </div>
    }
}

/// The five summary cards above the report: identity from the profile call,
/// rates and the derived monthly estimate from the salary call.
#[component]
pub fn SummaryCards(vm: ReportsViewModel) -> impl IntoView {
    let name = Signal::derive(move || {
        vm.profile
            .get()
            .map(|p| p.name)
            .unwrap_or_default()
    });
    let email = Signal::derive(move || {
        vm.profile
            .get()
            .map(|p| p.email)
            .unwrap_or_default()
    });
    let base_rate = Signal::derive(move || {
        vm.salary
            .get()
            .map(|s| format_rate(s.base_salary_per_hour))
            .unwrap_or_default()
    });
    let overtime_rate = Signal::derive(move || {
        vm.salary
            .get()
            .map(|s| format_rate(s.overtime_salary_per_hour))
            .unwrap_or_default()
    });
    let earning = Signal::derive(move || {
        vm.salary
            .get()
            .map(|s| format_money(monthly_earning(s.base_salary_per_hour)))
            .unwrap_or_default()
    });

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-3">
            <InfoCard title="Name" value=name loading=vm.profile_loading />
            <InfoCard title="Email" value=email loading=vm.profile_loading />
            <InfoCard title="Base Salary" value=base_rate loading=vm.salary_loading accent="text-green-600" />
            <InfoCard title="Overtime Rate" value=overtime_rate loading=vm.salary_loading accent="text-blue-600" />
            <InfoCard title="Monthly Earning" value=earning loading=vm.salary_loading accent="text-purple-600" />
        </div>
    }
}
