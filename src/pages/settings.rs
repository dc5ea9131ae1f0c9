use assetdesk_shared::{AdminProfileUpdate, SessionUser};
use tracing::info;

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::i18n::{Locale, translate};
use crate::request::HttpClient;
use crate::session::{Session, SessionUserPatch};

/// 管理员资料表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileInvalid {
    PasswordMismatch,
    MissingCurrentPassword,
}

impl ProfileInvalid {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProfileInvalid::PasswordMismatch => "settings.passwordMismatch",
            ProfileInvalid::MissingCurrentPassword => "settings.currentPasswordRequired",
        }
    }
}

impl ProfileForm {
    /// 用当前会话预填，密码字段留空
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            ..Self::default()
        }
    }

    /// 本地校验并生成请求体；只有填写了新密码时才发送 `password`
    pub fn validate(&self) -> Result<AdminProfileUpdate, ProfileInvalid> {
        if !self.new_password.is_empty() && self.new_password != self.confirm_password {
            return Err(ProfileInvalid::PasswordMismatch);
        }
        if self.current_password.is_empty() {
            return Err(ProfileInvalid::MissingCurrentPassword);
        }
        Ok(AdminProfileUpdate {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            current_password: self.current_password.clone(),
            password: (!self.new_password.is_empty()).then(|| self.new_password.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// 资料已更新，会话快照已合并
    Updated(Session),
    /// 密码已修改，会话已注销
    PasswordChanged,
}

/// 提交资料修改
///
/// 校验失败返回 `Validation`，不发出请求。修改密码后强制注销。
pub async fn submit_profile<C: HttpClient>(
    api: &ApiClient<C>,
    session: &Session,
    locale: Locale,
    form: &ProfileForm,
) -> ApiResult<ProfileOutcome> {
    let update = form
        .validate()
        .map_err(|invalid| ApiError::validation(translate(locale, invalid.i18n_key())))?;
    let password_changed = update.password.is_some();

    let profile = api.admin().update_profile(&update).await?;

    if password_changed {
        info!("admin password changed, signing out");
        Session::logout(api.storage());
        return Ok(ProfileOutcome::PasswordChanged);
    }

    // 204 时以提交的值为准
    let (full_name, email) = match profile {
        Some(profile) => (profile.full_name, profile.email),
        None => (update.full_name, update.email),
    };
    let mut session = session.clone();
    session.update_user(
        api.storage(),
        SessionUserPatch {
            full_name: Some(full_name),
            email: Some(email),
        },
    );
    Ok(ProfileOutcome::Updated(session))
}
