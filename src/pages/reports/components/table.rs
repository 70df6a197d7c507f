use leptos::*;

use crate::pages::reports::{
    utils::{format_money, page_count, page_slice, status_class},
    view_model::ReportsViewModel,
};

#[component]
pub fn RecordsTable(vm: ReportsViewModel) -> impl IntoView {
    let searching = vm.search_action.pending();
    let paged = move || page_slice(&vm.records.get(), vm.page.get());
    let total_pages = move || page_count(vm.records.get().len());

    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm p-4 space-y-4">
            <h2 class="text-base md:text-xl font-bold text-gray-800">
                "Attendance & Salary Records"
            </h2>
            {move || {
                if searching.get() {
                    view! {
                        <div class="flex justify-center items-center py-12">
                            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        </div>
                    }
                        .into_view()
                } else if vm.records.get().is_empty() {
                    view! {
                        <div class="text-center py-12 text-gray-500 text-sm md:text-base">
                            "No records found. Please select filters and click Search."
                        </div>
                    }
                        .into_view()
                } else {
                    view! {
                        <div class="overflow-x-auto">
                            <table class="min-w-full text-sm">
                                <thead>
                                    <tr class="text-left text-[0.625rem] font-bold text-gray-400 uppercase tracking-wider border-b border-gray-200">
                                        <th class="px-3 py-2">"Date"</th>
                                        <th class="px-3 py-2">"Status"</th>
                                        <th class="px-3 py-2">"Check In"</th>
                                        <th class="px-3 py-2">"Check Out"</th>
                                        <th class="px-3 py-2">"Hours"</th>
                                        <th class="px-3 py-2">"Overtime"</th>
                                        <th class="px-3 py-2">"Daily Pay"</th>
                                        <th class="px-3 py-2">"OT Pay"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=paged
                                        key=|record| record.date.clone()
                                        children=move |record| {
                                            let chip = format!(
                                                "inline-block px-2 py-0.5 rounded-full text-xs font-bold {}",
                                                status_class(&record.status),
                                            );
                                            view! {
                                                <tr class="border-b border-gray-100 hover:bg-gray-50">
                                                    <td class="px-3 py-2 font-bold text-gray-800">
                                                        {record.date.clone()}
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        <span class=chip>{record.status.clone()}</span>
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        {record.check_in.clone().unwrap_or_else(|| "-".into())}
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        {record.check_out.clone().unwrap_or_else(|| "-".into())}
                                                    </td>
                                                    <td class="px-3 py-2">{format!("{:.1}", record.hours_worked)}</td>
                                                    <td class="px-3 py-2">{format!("{:.1}", record.overtime)}</td>
                                                    <td class="px-3 py-2 text-green-700">
                                                        {format_money(record.daily_pay)}
                                                    </td>
                                                    <td class="px-3 py-2 text-blue-700">
                                                        {format_money(record.ot_pay)}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                        <div class="flex items-center justify-between pt-2">
                            <button
                                type="button"
                                on:click=move |_| vm.prev_page()
                                disabled=move || vm.page.get() == 0
                                class="px-3 py-1 text-sm font-bold text-blue-600 border border-blue-600 rounded-lg disabled:opacity-40"
                            >
                                "Previous"
                            </button>
                            <span class="text-sm text-gray-600">
                                {move || format!("Page {} of {}", vm.page.get() + 1, total_pages())}
                            </span>
                            <button
                                type="button"
                                on:click=move |_| vm.next_page()
                                disabled=move || vm.page.get() + 1 >= total_pages()
                                class="px-3 py-1 text-sm font-bold text-blue-600 border border-blue-600 rounded-lg disabled:opacity-40"
                            >
                                "Next"
                            </button>
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
