use std::rc::Rc;

use super::utils::ReportFilter;
use crate::api::{ApiClient, ApiError, AttendanceRecord, Profile, SalaryDetails};

#[derive(Clone)]
pub struct ReportsRepository {
    api: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        Ok(self.api.get_profile().await?.profile)
    }

    pub async fn fetch_salary(&self) -> Result<SalaryDetails, ApiError> {
        Ok(self.api.get_salary_details().await?.salary)
    }

    pub async fn fetch_records(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let query = filter.build_query()?;
        Ok(self.api.get_salary_attendance(&query).await?.records)
    }
}

impl Default for ReportsRepository {
    fn default() -> Self {
        Self::new()
    }
}
