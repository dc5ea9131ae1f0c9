//! 认证会话
//!
//! 会话只存在于客户端：令牌和用户快照分别持久化在 `authToken` 与 `user` 两个键中。
//! 启动时同步地从存储恢复，不需要网络往返。

use assetdesk_shared::{LoginRequest, SessionUser};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use crate::storage::{KEY_AUTH_TOKEN, KEY_SESSION_USER, Storage};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(SessionUser),
}

/// 对缓存用户快照的部分更新
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUserPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// 只有令牌和可解析的用户快照同时存在时才视为已登录
    pub fn rehydrate(storage: &dyn Storage) -> Self {
        let Some(token) = storage.get(KEY_AUTH_TOKEN) else {
            return Session::Unauthenticated;
        };
        let Some(raw) = storage.get(KEY_SESSION_USER) else {
            return Session::Unauthenticated;
        };
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(mut user) => {
                user.token = token;
                Session::Authenticated(user)
            }
            Err(e) => {
                warn!(error = %e, "stored session user is unreadable");
                Session::Unauthenticated
            }
        }
    }

    /// 调用登录端点；成功后持久化令牌与用户快照
    ///
    /// 失败时错误原样返回，本地状态不变。
    pub async fn login<C: HttpClient>(api: &ApiClient<C>, credentials: &LoginRequest) -> ApiResult<Self> {
        let user = match api.auth().login(credentials).await {
            Ok(user) => user,
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "login failed");
                return Err(e);
            }
        };

        let storage = api.storage();
        storage.set(KEY_AUTH_TOKEN, &user.token);
        storage.set(KEY_SESSION_USER, &serde_json::to_string(&user)?);
        info!(username = %user.username, "logged in");
        Ok(Session::Authenticated(user))
    }

    pub fn logout(storage: &dyn Storage) -> Self {
        storage.delete(KEY_AUTH_TOKEN);
        storage.delete(KEY_SESSION_USER);
        info!("logged out");
        Session::Unauthenticated
    }

    /// 合并字段到用户快照并持久化；不调用服务端。未登录时无操作。
    pub fn update_user(&mut self, storage: &dyn Storage, patch: SessionUserPatch) {
        let Session::Authenticated(user) = self else {
            return;
        };
        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        match serde_json::to_string(user) {
            Ok(raw) => {
                storage.set(KEY_SESSION_USER, &raw);
            }
            Err(e) => warn!(error = %e, "failed to persist session user"),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Unauthenticated => None,
        }
    }
}
