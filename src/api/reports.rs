use super::{
    client::ApiClient,
    types::{ApiError, ProfileResponse, SalaryAttendanceResponse, SalaryResponse},
};

impl ApiClient {
    /// `GET /profile` — name and email of the signed-in employee.
    pub async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get_json("/profile", &[]).await
    }

    /// `GET /salary/GetSalaryDetails` — hourly base and overtime rates.
    pub async fn get_salary_details(&self) -> Result<SalaryResponse, ApiError> {
        self.get_json("/salary/GetSalaryDetails", &[]).await
    }

    /// `GET /salary-attendance` — report rows for a monthly or custom range
    /// filter; the caller builds the query pairs.
    pub async fn get_salary_attendance(
        &self,
        query: &[(String, String)],
    ) -> Result<SalaryAttendanceResponse, ApiError> {
        self.get_json("/salary-attendance", query).await
    }
}
