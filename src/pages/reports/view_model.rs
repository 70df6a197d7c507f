use std::rc::Rc;

use chrono::Datelike;
use leptos::*;

use super::{
    repository::ReportsRepository,
    utils::{page_count, FilterKind, ReportFilter},
};
use crate::api::{ApiClient, ApiError, AttendanceRecord, Profile, SalaryDetails};

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub profile: RwSignal<Option<Profile>>,
    pub profile_loading: RwSignal<bool>,
    pub salary: RwSignal<Option<SalaryDetails>>,
    pub salary_loading: RwSignal<bool>,
    pub filter_kind: RwSignal<FilterKind>,
    pub month: RwSignal<String>,
    pub year: RwSignal<String>,
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,
    pub records: RwSignal<Vec<AttendanceRecord>>,
    pub page: RwSignal<usize>,
    pub searched: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub fetch_profile_action: Action<(), ()>,
    pub fetch_salary_action: Action<(), ()>,
    pub search_action: Action<ReportFilter, ()>,
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReportsRepository::new_with_client(Rc::new(api));

    let profile = create_rw_signal(None);
    let profile_loading = create_rw_signal(true);
    let salary = create_rw_signal(None);
    let salary_loading = create_rw_signal(true);
    let filter_kind = create_rw_signal(FilterKind::default());
    let month = create_rw_signal("01".to_string());
    let year = create_rw_signal(chrono::Local::now().year().to_string());
    let from_date = create_rw_signal(String::new());
    let to_date = create_rw_signal(String::new());
    let records = create_rw_signal(Vec::<AttendanceRecord>::new());
    let page = create_rw_signal(0usize);
    let searched = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);

    let repo_for_profile = repository.clone();
    let fetch_profile_action = create_action(move |_: &()| {
        let repo = repo_for_profile.clone();
        async move {
            profile_loading.set(true);
            match repo.fetch_profile().await {
                Ok(data) => profile.set(Some(data)),
                Err(err) => {
                    if !err.is_session_expired() {
                        error.set(Some(err));
                    }
                }
            }
            profile_loading.set(false);
        }
    });

    let repo_for_salary = repository.clone();
    let fetch_salary_action = create_action(move |_: &()| {
        let repo = repo_for_salary.clone();
        async move {
            salary_loading.set(true);
            match repo.fetch_salary().await {
                Ok(data) => salary.set(Some(data)),
                Err(err) => {
                    if !err.is_session_expired() {
                        error.set(Some(err));
                    }
                }
            }
            salary_loading.set(false);
        }
    });

    let search_action = create_action(move |filter: &ReportFilter| {
        let repo = repository.clone();
        let filter = filter.clone();
        async move {
            match repo.fetch_records(&filter).await {
                Ok(rows) => {
                    error.set(None);
                    records.set(rows);
                    page.set(0);
                    searched.set(true);
                }
                Err(err) => {
                    // SESSION_EXPIRED already redirected; nothing to show.
                    if !err.is_session_expired() {
                        error.set(Some(err));
                    }
                }
            }
        }
    });

    // Initial fetch
    fetch_profile_action.dispatch(());
    fetch_salary_action.dispatch(());

    ReportsViewModel {
        profile,
        profile_loading,
        salary,
        salary_loading,
        filter_kind,
        month,
        year,
        from_date,
        to_date,
        records,
        page,
        searched,
        error,
        fetch_profile_action,
        fetch_salary_action,
        search_action,
    }
}

impl ReportsViewModel {
    pub fn current_filter(&self) -> ReportFilter {
        ReportFilter {
            kind: self.filter_kind.get_untracked(),
            month: self.month.get_untracked(),
            year: self.year.get_untracked(),
            from_date: self.from_date.get_untracked(),
            to_date: self.to_date.get_untracked(),
        }
    }

    /// Run the search. Filter validation failures stay on the client.
    pub fn submit_search(&self) {
        if self.search_action.pending().get_untracked() {
            return;
        }
        let filter = self.current_filter();
        if let Err(err) = filter.build_query() {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.search_action.dispatch(filter);
    }

    pub fn page_count(&self) -> usize {
        page_count(self.records.get_untracked().len())
    }

    pub fn next_page(&self) {
        let last = self.page_count().saturating_sub(1);
        self.page.update(|p| *p = (*p + 1).min(last));
    }

    pub fn prev_page(&self) {
        self.page.update(|p| *p = p.saturating_sub(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;
    use crate::utils::{cookie, nav, storage};
    use httpmock::prelude::*;
    use serde_json::json;

    fn reset_client_side_state() {
        cookie::remove(cookie::TOKEN_COOKIE);
        storage::clear();
        nav::reset();
    }

    fn record_json(date: &str) -> serde_json::Value {
        json!({
            "date": date,
            "status": "Present",
            "checkIn": "09:00",
            "checkOut": "18:00",
            "hoursWorked": 8.0,
            "overtime": 0.0,
            "dailyPay": 1280.0,
            "otPay": 0.0
        })
    }

    fn mock_profile_and_salary(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/profile");
            then.status(200).json_body(json!({
                "success": true,
                "profile": { "name": "Alice Example", "email": "alice@example.com" }
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/salary/GetSalaryDetails");
            then.status(200).json_body(json!({
                "success": true,
                "salary": { "base_salary_per_hour": 160.0, "overtime_salary_per_hour": 240.0 }
            }));
        });
    }

    async fn settle<F: Fn() -> bool>(done: F) {
        for _ in 0..50 {
            if done() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    }

    #[test]
    fn profile_and_salary_load_on_mount() {
        reset_client_side_state();
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            mock_profile_and_salary(&server);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = use_reports_view_model();
            settle(|| {
                !vm.profile_loading.get_untracked() && !vm.salary_loading.get_untracked()
            })
            .await;

            assert_eq!(vm.profile.get_untracked().unwrap().name, "Alice Example");
            assert_eq!(
                vm.salary.get_untracked().unwrap().base_salary_per_hour,
                160.0
            );
            assert!(vm.error.get_untracked().is_none());
            runtime.dispose();
        });
    }

    #[test]
    fn monthly_search_replaces_records_and_resets_page() {
        reset_client_side_state();
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            mock_profile_and_salary(&server);
            let mock = server.mock(|when, then| {
                when.method(GET)
                    .path("/api/salary-attendance")
                    .query_param("month", "02")
                    .query_param("year", "2026");
                then.status(200).json_body(json!({
                    "success": true,
                    "records": [record_json("2026-02-02"), record_json("2026-02-03")]
                }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = use_reports_view_model();
            vm.month.set("02".into());
            vm.year.set("2026".into());
            vm.page.set(4);
            vm.submit_search();
            settle(|| vm.searched.get_untracked()).await;

            assert_eq!(vm.records.get_untracked().len(), 2);
            assert_eq!(vm.page.get_untracked(), 0);
            assert!(vm.error.get_untracked().is_none());
            mock.assert();
            runtime.dispose();
        });
    }

    #[test]
    fn custom_range_requires_both_dates_before_any_request() {
        reset_client_side_state();
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            mock_profile_and_salary(&server);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = use_reports_view_model();
            vm.filter_kind.set(FilterKind::Custom);
            vm.from_date.set("2026-01-01".into());
            vm.submit_search();

            assert!(vm.search_action.input().get_untracked().is_none());
            assert_eq!(vm.error.get_untracked().unwrap().code, "VALIDATION_ERROR");
            runtime.dispose();
        });
    }

    #[test]
    fn expired_session_on_search_is_not_surfaced_inline() {
        reset_client_side_state();
        cookie::set(cookie::TOKEN_COOKIE, "stale", 7).unwrap();
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/api/profile");
                then.status(401).json_body(json!({ "error": "Unauthorized" }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/salary/GetSalaryDetails");
                then.status(401).json_body(json!({ "error": "Unauthorized" }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/salary-attendance");
                then.status(401).json_body(json!({ "error": "Unauthorized" }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = use_reports_view_model();
            vm.submit_search();
            settle(|| nav::last_assigned().is_some()).await;

            assert_eq!(nav::last_assigned().as_deref(), Some("/login"));
            assert!(vm.error.get_untracked().is_none());
            assert!(cookie::get(cookie::TOKEN_COOKIE).is_none());
            runtime.dispose();
        });
    }

    #[test]
    fn page_navigation_is_bounded() {
        reset_client_side_state();
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            mock_profile_and_salary(&server);
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = use_reports_view_model();
            let rows = (0..120)
                .map(|i| AttendanceRecord {
                    date: format!("2026-01-{:02}", (i % 28) + 1),
                    ..Default::default()
                })
                .collect::<Vec<_>>();
            vm.records.set(rows);

            assert_eq!(vm.page_count(), 3);
            vm.prev_page();
            assert_eq!(vm.page.get_untracked(), 0);
            vm.next_page();
            vm.next_page();
            vm.next_page();
            assert_eq!(vm.page.get_untracked(), 2);
            runtime.dispose();
        });
    }
}
