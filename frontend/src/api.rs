//! 浏览器中的接口门面
//!
//! 账号、院校、辅导员等查询仍由内存 Mock 后端回答；
//! 辅导员仪表盘数据从站点的 `/api/dashboard` 拉取。

use std::rc::Rc;

use async_trait::async_trait;
use career_saarthi::{MockBackend, PortalApi};
use career_saarthi_shared::protocol::{
    BookAppointmentRequest, DashboardRequest, LoginRequest, StudentProgressRequest,
};
use career_saarthi_shared::{
    ApiRequest, ApiResponse, Appointment, College, Counselor, DashboardData, StudentProgress, User,
};
use gloo_net::http::Request;

pub struct BrowserApi {
    mock: Rc<MockBackend>,
    base_url: String,
}

impl BrowserApi {
    pub fn new(mock: MockBackend, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            mock: Rc::new(mock),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 获取仪表盘数据，响应体就是 `DashboardData` 本身
    async fn fetch_dashboard(&self) -> Result<DashboardData, String> {
        let url = self.url(DashboardRequest::PATH);
        let res = Request::get(&url).send().await.map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("GET {} failed: {}", DashboardRequest::PATH, res.status()));
        }

        let body = res.text().await.map_err(|e| e.to_string())?;
        serde_json_wasm::from_str::<DashboardData>(&body).map_err(|e| e.to_string())
    }
}

#[async_trait(?Send)]
impl PortalApi for BrowserApi {
    async fn login(&self, req: LoginRequest) -> ApiResponse<User> {
        self.mock.login(req).await
    }

    async fn current_user(&self, token: Option<String>) -> ApiResponse<User> {
        self.mock.current_user(token).await
    }

    async fn colleges(&self) -> ApiResponse<Vec<College>> {
        self.mock.colleges().await
    }

    async fn college_by_id(&self, id: &str) -> ApiResponse<College> {
        self.mock.college_by_id(id).await
    }

    async fn counselors(&self) -> ApiResponse<Vec<Counselor>> {
        self.mock.counselors().await
    }

    async fn book_appointment(&self, req: BookAppointmentRequest) -> ApiResponse<Appointment> {
        self.mock.book_appointment(req).await
    }

    async fn student_progress(&self, req: StudentProgressRequest) -> ApiResponse<StudentProgress> {
        self.mock.student_progress(req).await
    }

    async fn counselor_dashboard(&self) -> ApiResponse<DashboardData> {
        match self.fetch_dashboard().await {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => ApiResponse::fail(e),
        }
    }
}
