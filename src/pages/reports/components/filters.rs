use leptos::*;
use web_sys::HtmlInputElement;

use crate::pages::reports::{
    utils::{year_options, FilterKind, MONTHS},
    view_model::ReportsViewModel,
};

fn toggle_class(active: bool) -> String {
    if active {
        "flex-1 py-2 text-sm font-bold rounded-lg bg-blue-600 text-white border border-blue-600"
            .to_string()
    } else {
        "flex-1 py-2 text-sm font-bold rounded-lg bg-transparent text-blue-600 border border-blue-600 hover:bg-blue-50"
            .to_string()
    }
}

#[component]
pub fn FilterBar(vm: ReportsViewModel) -> impl IntoView {
    let searching = vm.search_action.pending();
    let years = year_options(
        vm.year
            .get_untracked()
            .parse()
            .unwrap_or_default(),
    );

    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-4 space-y-4">
            <h2 class="text-base md:text-xl font-bold text-gray-800">"Filter Records"</h2>
            <div class="flex gap-2">
                <button
                    type="button"
                    class=move || toggle_class(vm.filter_kind.get() == FilterKind::Monthly)
                    on:click=move |_| vm.filter_kind.set(FilterKind::Monthly)
                >
                    "Monthly"
                </button>
                <button
                    type="button"
                    class=move || toggle_class(vm.filter_kind.get() == FilterKind::Custom)
                    on:click=move |_| vm.filter_kind.set(FilterKind::Custom)
                >
                    "Custom Range"
                </button>
            </div>

            <Show when=move || vm.filter_kind.get() == FilterKind::Monthly fallback=|| ()>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-bold text-gray-800 mb-1">"Month"</label>
                        <select
                            class="w-full h-10 border border-gray-300 rounded-lg px-2 text-sm"
                            on:change=move |ev| vm.month.set(event_target_value(&ev))
                        >
                            {MONTHS
                                .iter()
                                .map(|(value, label)| {
                                    let value = *value;
                                    view! {
                                        <option value=value selected=move || vm.month.get() == value>
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-gray-800 mb-1">"Year"</label>
                        <select
                            class="w-full h-10 border border-gray-300 rounded-lg px-2 text-sm"
                            on:change=move |ev| vm.year.set(event_target_value(&ev))
                        >
                            {years
                                .iter()
                                .map(|year| {
                                    let year = year.clone();
                                    let option_year = year.clone();
                                    view! {
                                        <option
                                            value=year.clone()
                                            selected=move || vm.year.get() == option_year
                                        >
                                            {year.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </Show>

            <Show when=move || vm.filter_kind.get() == FilterKind::Custom fallback=|| ()>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-bold text-gray-800 mb-1">"From Date"</label>
                        <input
                            type="date"
                            class="w-full h-10 border border-gray-300 rounded-lg px-2 text-sm"
                            prop:value=vm.from_date
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                vm.from_date.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-gray-800 mb-1">"To Date"</label>
                        <input
                            type="date"
                            class="w-full h-10 border border-gray-300 rounded-lg px-2 text-sm"
                            prop:value=vm.to_date
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                vm.to_date.set(target.value());
                            }
                        />
                    </div>
                </div>
            </Show>

            <button
                type="button"
                disabled=move || searching.get()
                on:click=move |_| vm.submit_search()
                class="w-full h-10 bg-blue-600 hover:bg-blue-700 text-white text-sm font-bold rounded-lg disabled:bg-gray-400"
            >
                {move || if searching.get() { "Searching..." } else { "Search" }}
            </button>
        </div>
    }
}
