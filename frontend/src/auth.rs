//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use assetdesk::shared::{LoginRequest, SessionUser};
use assetdesk::{ApiResult, Session};
use leptos::prelude::*;

use crate::api::BrowserApi;
use crate::web::LocalStorage;

/// 认证上下文
///
/// 会话快照放在 `RwSignal` 中，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
}

impl AuthContext {
    /// 从 LocalStorage 同步恢复会话，不需要网络往返
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::rehydrate(&LocalStorage)),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    /// 当前用户快照
    pub fn user(&self) -> Option<SessionUser> {
        self.session.with(|s| s.user().cloned())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录并保存状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub async fn login(ctx: AuthContext, api: &BrowserApi, credentials: LoginRequest) -> ApiResult<()> {
    let session = Session::login(api, &credentials).await?;
    ctx.session.set(session);
    Ok(())
}

/// 注销并清除状态
pub fn logout(ctx: AuthContext) {
    ctx.session.set(Session::logout(&LocalStorage));
}

/// 资料修改后替换会话快照（核心库已完成持久化）
pub fn replace_session(ctx: AuthContext, session: Session) {
    ctx.session.set(session);
}
