use crate::api::ApiError;

pub const RECORDS_PER_PAGE: usize = 50;

/// Earning estimate assumes a standard month of 8-hour days, 26 working days.
pub const HOURS_PER_DAY: f64 = 8.0;
pub const WORKDAYS_PER_MONTH: f64 = 26.0;

pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    Monthly,
    Custom,
}

/// What the user picked in the filter bar; turned into query params on search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportFilter {
    pub kind: FilterKind,
    pub month: String,
    pub year: String,
    pub from_date: String,
    pub to_date: String,
}

impl ReportFilter {
    /// Query pairs for `GET /salary-attendance`. A custom range needs both
    /// ends before anything leaves the client.
    pub fn build_query(&self) -> Result<Vec<(String, String)>, ApiError> {
        match self.kind {
            FilterKind::Monthly => Ok(vec![
                ("month".to_string(), self.month.clone()),
                ("year".to_string(), self.year.clone()),
            ]),
            FilterKind::Custom => {
                if self.from_date.is_empty() || self.to_date.is_empty() {
                    return Err(ApiError::validation("Please select both from and to dates"));
                }
                Ok(vec![
                    ("fromDate".to_string(), self.from_date.clone()),
                    ("toDate".to_string(), self.to_date.clone()),
                ])
            }
        }
    }
}

/// The last five years, newest first, as select options.
pub fn year_options(current_year: i32) -> Vec<String> {
    (0..5).map(|i| (current_year - i).to_string()).collect()
}

pub fn monthly_earning(base_salary_per_hour: f64) -> f64 {
    base_salary_per_hour * HOURS_PER_DAY * WORKDAYS_PER_MONTH
}

pub fn format_money(amount: f64) -> String {
    format!("\u{20B9}{amount:.2}")
}

pub fn format_rate(rate_per_hour: f64) -> String {
    format!("\u{20B9}{rate_per_hour:.2}/hour")
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(RECORDS_PER_PAGE).max(1)
}

pub fn page_slice<T: Clone>(rows: &[T], page: usize) -> Vec<T> {
    rows.iter()
        .skip(page * RECORDS_PER_PAGE)
        .take(RECORDS_PER_PAGE)
        .cloned()
        .collect()
}

/// Chip styling per attendance status.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "Present" => "bg-green-100 text-green-800",
        "Absent" => "bg-red-100 text-red-800",
        "Half Day" => "bg-yellow-100 text-yellow-800",
        _ => "bg-gray-100 text-gray-800",
    }
}
