use std::sync::Arc;

use assetdesk_shared::protocol::{
    ApiRequest, CreateAsset, CreateUser, DeleteAsset, DeleteDepartment, DeleteUser, GetAsset,
    GetDepartment, GetUser, ListAssets, ListDepartments, ListUsers, UpdateAsset,
    UpdateDepartment, UpdateUser,
};
use assetdesk_shared::{
    AdminProfile, AdminProfileUpdate, Asset, AssetStatus, CONTENT_TYPE_JSON, Department,
    DepartmentDraft, DepartmentId, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LoginRequest,
    SessionUser, User, UserId,
};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult, reason_phrase};
use crate::host::Navigator;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::storage::{KEY_AUTH_TOKEN, Storage};

/// 会话失效后跳转的路径
pub const LOGIN_PATH: &str = "/";

// =========================================================
// 网关: ApiClient
// =========================================================

/// REST 后端网关
///
/// 统一负责请求头、错误翻译和会话失效处理；具体端点由 `ApiRequest` 描述。
pub struct ApiClient<C> {
    base_url: String,
    http: C,
    storage: Arc<dyn Storage>,
    navigator: Arc<dyn Navigator>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(
        base_url: &str,
        http: C,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            storage,
            navigator,
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn assets(&self) -> AssetsApi<'_, C> {
        AssetsApi { client: self }
    }

    pub fn users(&self) -> UsersApi<'_, C> {
        UsersApi { client: self }
    }

    pub fn departments(&self) -> DepartmentsApi<'_, C> {
        DepartmentsApi { client: self }
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_, C> {
        AdminApi { client: self }
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let url = format!("{}{}", self.base_url, req.path());
        let mut http_req = HttpRequest::new(&url, R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .with_body(req.body()?);

        if R::AUTHENTICATED {
            if let Some(token) = self.storage.get(KEY_AUTH_TOKEN) {
                http_req = http_req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
            }
        }
        Ok(http_req)
    }

    /// 发送一个端点请求并解析响应
    ///
    /// 认证端点返回 401 时，先清除本地令牌并跳转到登录页，再返回 `Unauthorized`。
    pub async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let http_req = self.build(req)?;
        let method = R::METHOD.as_str();
        let path = req.path();
        debug!(method, %path, "api request");

        let resp = self.http.send(http_req).await.inspect_err(|e| {
            warn!(method, %path, error = %e, "api request failed");
        })?;

        if resp.is_success() {
            return resp.json().inspect_err(|e| {
                warn!(method, %path, error = %e, "api response could not be decoded");
            });
        }

        let message = error_message(&resp);
        if resp.status == 401 && R::AUTHENTICATED {
            warn!(method, %path, "session expired, clearing token");
            self.storage.delete(KEY_AUTH_TOKEN);
            self.navigator.redirect(LOGIN_PATH);
            return Err(ApiError::Unauthorized { message });
        }

        warn!(method, %path, status = resp.status, %message, "api error");
        Err(ApiError::Http {
            status: resp.status,
            message,
        })
    }
}

/// 错误消息：JSON 的 `message` 字段 > 原始响应体 > 状态码短语
fn error_message(resp: &HttpResponse) -> String {
    let body = resp.body.trim();
    if body.is_empty() {
        return reason_phrase(resp.status).to_string();
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

// =========================================================
// 资源分组 (Resource Handles)
// =========================================================

/// 按资源分组的端点句柄，按值使用
pub struct AssetsApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<C: HttpClient> AssetsApi<'_, C> {
    pub async fn list(self, search: Option<&str>, status: Option<AssetStatus>) -> ApiResult<Vec<Asset>> {
        let req = ListAssets {
            search: search.map(str::to_string),
            status,
        };
        self.client.send(&req).await
    }

    pub async fn get(self, id: &str) -> ApiResult<Asset> {
        self.client.send(&GetAsset { id: id.to_string() }).await
    }

    pub async fn create(self, asset: Asset) -> ApiResult<Option<Asset>> {
        self.client.send(&CreateAsset::new(asset)).await
    }

    pub async fn update(self, id: &str, asset: Asset) -> ApiResult<Option<Asset>> {
        self.client.send(&UpdateAsset::new(id, asset)).await
    }

    pub async fn delete(self, id: &str) -> ApiResult<()> {
        self.client.send(&DeleteAsset { id: id.to_string() }).await
    }
}

pub struct UsersApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<C: HttpClient> UsersApi<'_, C> {
    pub async fn list(self) -> ApiResult<Vec<User>> {
        self.client.send(&ListUsers).await
    }

    pub async fn get(self, id: UserId) -> ApiResult<User> {
        self.client.send(&GetUser { id }).await
    }

    pub async fn create(self, user: User) -> ApiResult<Option<User>> {
        self.client.send(&CreateUser::new(user)).await
    }

    pub async fn update(self, id: UserId, user: User) -> ApiResult<Option<User>> {
        self.client.send(&UpdateUser { id, user }).await
    }

    pub async fn delete(self, id: UserId) -> ApiResult<()> {
        self.client.send(&DeleteUser { id }).await
    }
}

pub struct DepartmentsApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<C: HttpClient> DepartmentsApi<'_, C> {
    pub async fn list(self) -> ApiResult<Vec<Department>> {
        self.client.send(&ListDepartments).await
    }

    pub async fn get(self, id: DepartmentId) -> ApiResult<Department> {
        self.client.send(&GetDepartment { id }).await
    }

    pub async fn create(self, draft: DepartmentDraft) -> ApiResult<Option<Department>> {
        self.client.send(&draft).await
    }

    pub async fn update(self, id: DepartmentId, draft: DepartmentDraft) -> ApiResult<Option<Department>> {
        self.client.send(&UpdateDepartment { id, draft }).await
    }

    pub async fn delete(self, id: DepartmentId) -> ApiResult<()> {
        self.client.send(&DeleteDepartment { id }).await
    }
}

pub struct AuthApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<C: HttpClient> AuthApi<'_, C> {
    /// 任何非 2xx 响应都视为凭据错误
    pub async fn login(self, credentials: &LoginRequest) -> ApiResult<SessionUser> {
        self.client.send(credentials).await.map_err(|e| match e {
            ApiError::Http { .. } | ApiError::Unauthorized { .. } => ApiError::InvalidCredentials,
            other => other,
        })
    }
}

pub struct AdminApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<C: HttpClient> AdminApi<'_, C> {
    /// 204 时为 `None`
    pub async fn update_profile(self, update: &AdminProfileUpdate) -> ApiResult<Option<AdminProfile>> {
        self.client.send(update).await
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::host::testing::RecordingNavigator;
    use crate::request::{HttpMethod, MockHttpClient};
    use crate::storage::MemoryStorage;
    use serde_json::json;

    pub const BASE: &str = "http://api.test/api";

    pub fn client_with_token(token: Option<&str>) -> (ApiClient<MockHttpClient>, Arc<MemoryStorage>, Arc<RecordingNavigator>) {
        let storage = Arc::new(MemoryStorage::new());
        if let Some(token) = token {
            storage.set(KEY_AUTH_TOKEN, token);
        }
        let navigator = Arc::new(RecordingNavigator::default());
        let client = ApiClient::new(
            &format!("{}/", BASE),
            MockHttpClient::new(),
            storage.clone(),
            navigator.clone(),
        );
        (client, storage, navigator)
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", BASE, path)
    }

    #[tokio::test]
    async fn attaches_json_and_bearer_headers() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_response(HttpMethod::Get, &url("/users"), 200, json!([]));

        let users = client.users().list().await.unwrap();
        assert!(users.is_empty());

        let reqs = client.http.requests.borrow();
        assert_eq!(reqs[0].header(HEADER_CONTENT_TYPE), Some(CONTENT_TYPE_JSON));
        assert_eq!(reqs[0].header(HEADER_AUTHORIZATION), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn omits_bearer_without_token() {
        let (client, _, _) = client_with_token(None);
        client.http.mock_response(HttpMethod::Get, &url("/departments"), 200, json!([]));

        client.departments().list().await.unwrap();
        let reqs = client.http.requests.borrow();
        assert_eq!(reqs[0].header(HEADER_AUTHORIZATION), None);
        assert_eq!(reqs[0].header(HEADER_CONTENT_TYPE), Some(CONTENT_TYPE_JSON));
    }

    #[tokio::test]
    async fn no_content_resolves_to_unit() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_raw(HttpMethod::Delete, &url("/assets/IT-0001"), 204, "");

        client.assets().delete("IT-0001").await.unwrap();
    }

    #[tokio::test]
    async fn no_content_on_write_is_empty_result() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_raw(HttpMethod::Put, &url("/assets/IT-1"), 204, "");
        client.http.mock_raw(HttpMethod::Post, &url("/departments"), 204, "");

        let asset = crate::filter::tests::asset("IT-1", "XPS", AssetStatus::InUse);
        assert_eq!(client.assets().update("IT-1", asset).await, Ok(None));

        let draft = DepartmentDraft { name: "Ops".into() };
        assert_eq!(client.departments().create(draft).await, Ok(None));
    }

    #[tokio::test]
    async fn unauthorized_clears_token_and_redirects() {
        let (client, storage, navigator) = client_with_token(Some("stale"));
        storage.set(crate::storage::KEY_LOCALE, "fr");
        client.http.mock_response(HttpMethod::Get, &url("/assets"), 401, json!({ "message": "Token expired" }));

        let err = client.assets().list(None, None).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: "Token expired".into()
            }
        );
        assert_eq!(storage.get(KEY_AUTH_TOKEN), None);
        assert_eq!(storage.get(crate::storage::KEY_LOCALE).as_deref(), Some("fr"));
        assert_eq!(navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn http_error_carries_status_and_body_text() {
        let (client, storage, navigator) = client_with_token(Some("abc"));
        client.http.mock_raw(HttpMethod::Put, &url("/users/3"), 409, "Email already in use");
        client.http.mock_raw(HttpMethod::Delete, &url("/users/3"), 500, "");

        let user = User {
            id: Some(3),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            department_id: 1,
            department_name: None,
        };
        let err = client.users().update(3, user).await.unwrap_err();
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.user_message(), "Email already in use");

        let err = client.users().delete(3).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Internal Server Error".into()
            }
        );

        assert_eq!(storage.get(KEY_AUTH_TOKEN).as_deref(), Some("abc"));
        assert!(navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn failed_login_is_invalid_credentials_without_redirect() {
        let (client, _, navigator) = client_with_token(None);
        client.http.mock_response(HttpMethod::Post, &url("/auth/login"), 401, json!({ "message": "Bad credentials" }));

        let creds = LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        };
        let err = client.auth().login(&creds).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
        assert!(navigator.redirects().is_empty());

        let reqs = client.http.requests.borrow();
        assert_eq!(reqs[0].header(HEADER_AUTHORIZATION), None);
        assert!(reqs[0].body.as_deref().unwrap().contains("\"username\":\"admin\""));
    }

    #[tokio::test]
    async fn list_filters_become_query_parameters() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_response(HttpMethod::Get, &url("/assets?search=mac&status=In%20Use"), 200, json!([]));

        client.assets().list(Some("mac"), Some(AssetStatus::InUse)).await.unwrap();
        assert_eq!(client.http.count(HttpMethod::Get, &url("/assets?search=mac&status=In%20Use")), 1);
    }

    #[tokio::test]
    async fn single_record_read_uses_authenticated_get() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_response(
            HttpMethod::Get,
            &url("/users/7"),
            200,
            json!({ "id": 7, "name": "Grace", "email": "grace@example.com", "departmentId": 2 }),
        );

        let user = client.users().get(7).await.unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.department_id, 2);

        let reqs = client.http.requests.borrow();
        assert!(reqs.iter().all(|r| r.header(HEADER_AUTHORIZATION) == Some("Bearer abc")));
        assert!(reqs.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let (client, _, _) = client_with_token(Some("abc"));
        client.http.mock_raw(HttpMethod::Get, &url("/departments/1"), 200, "<html>");

        let err = client.departments().get(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
