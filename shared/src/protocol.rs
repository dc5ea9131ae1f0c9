use crate::{
    AdminProfile, AdminProfileUpdate, Asset, AssetStatus, Department, DepartmentDraft,
    DepartmentId, LoginRequest, SessionUser, User, UserId,
};
use serde::de::DeserializeOwned;
use urlencoding::encode;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request. `()` for endpoints answering 204;
    /// writes use `Option<T>` so an empty 204 decodes to `None`.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the bearer token and is subject to session expiry.
    const AUTHENTICATED: bool = true;

    /// The URL path relative to the API base, including any query string.
    fn path(&self) -> String;

    /// JSON body, if the endpoint takes one.
    fn body(&self) -> serde_json::Result<Option<String>> {
        Ok(None)
    }
}

macro_rules! json_body {
    ($value:expr) => {
        serde_json::to_string($value).map(Some)
    };
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = SessionUser;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(self)
    }
}

// =========================================================
// Assets
// =========================================================

/// List assets; the filters become `search` / `status` query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAssets {
    pub search: Option<String>,
    pub status: Option<AssetStatus>,
}

impl ApiRequest for ListAssets {
    type Response = Vec<Asset>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("search={}", encode(search)));
        }
        if let Some(status) = self.status {
            params.push(format!("status={}", encode(status.as_str())));
        }
        if params.is_empty() {
            "/assets".to_string()
        } else {
            format!("/assets?{}", params.join("&"))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAsset {
    pub id: String,
}

impl ApiRequest for GetAsset {
    type Response = Asset;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/assets/{}", encode(&self.id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAsset {
    asset: Asset,
}

impl CreateAsset {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset: asset.normalized(),
        }
    }
}

impl ApiRequest for CreateAsset {
    type Response = Option<Asset>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/assets".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(&self.asset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAsset {
    id: String,
    asset: Asset,
}

impl UpdateAsset {
    pub fn new(id: impl Into<String>, asset: Asset) -> Self {
        Self {
            id: id.into(),
            asset: asset.normalized(),
        }
    }
}

impl ApiRequest for UpdateAsset {
    type Response = Option<Asset>;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/assets/{}", encode(&self.id))
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(&self.asset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAsset {
    pub id: String,
}

impl ApiRequest for DeleteAsset {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/assets/{}", encode(&self.id))
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListUsers;

impl ApiRequest for ListUsers {
    type Response = Vec<User>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/users".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetUser {
    pub id: UserId,
}

impl ApiRequest for GetUser {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUser {
    user: User,
}

impl CreateUser {
    /// Any id on the draft is dropped; the server assigns it.
    pub fn new(mut user: User) -> Self {
        user.id = None;
        Self { user }
    }
}

impl ApiRequest for CreateUser {
    type Response = Option<User>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(&self.user)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUser {
    pub id: UserId,
    pub user: User,
}

impl ApiRequest for UpdateUser {
    type Response = Option<User>;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(&self.user)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteUser {
    pub id: UserId,
}

impl ApiRequest for DeleteUser {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

// =========================================================
// Departments
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListDepartments;

impl ApiRequest for ListDepartments {
    type Response = Vec<Department>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/departments".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetDepartment {
    pub id: DepartmentId,
}

impl ApiRequest for GetDepartment {
    type Response = Department;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/departments/{}", self.id)
    }
}

impl ApiRequest for DepartmentDraft {
    type Response = Option<Department>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/departments".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDepartment {
    pub id: DepartmentId,
    pub draft: DepartmentDraft,
}

impl ApiRequest for UpdateDepartment {
    type Response = Option<Department>;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/departments/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(&self.draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteDepartment {
    pub id: DepartmentId,
}

impl ApiRequest for DeleteDepartment {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/departments/{}", self.id)
    }
}

// =========================================================
// Admin profile
// =========================================================

impl ApiRequest for AdminProfileUpdate {
    type Response = Option<AdminProfile>;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        "/admin/profile".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        json_body!(self)
    }
}
