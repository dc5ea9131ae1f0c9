//! 管理员资料设置
//!
//! 校验在任何网络请求之前完成；修改密码成功后强制重新登录。

use assetdesk::host::Prompter;
use assetdesk::pages::settings::{ProfileForm, ProfileOutcome, submit_profile};
use assetdesk::{ApiError, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{replace_session, use_auth};
use crate::components::avatar::Avatar;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;

/// 表单下方的提示
#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

/// 文本输入框
#[component]
fn ProfileField(
    input_id: &'static str,
    label_key: &'static str,
    kind: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="form-control">
            <label for=input_id class="label">
                <span class="label-text">{move || i18n.t(label_key)}</span>
            </label>
            <input id=input_id
                type=kind
                on:input=move |ev| on_input.run(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let auth = use_auth();
    let api = use_api();

    let form = RwSignal::new(auth.user().map(|u| ProfileForm::from_user(&u)).unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal(Option::<Notice>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        set_notice.set(None);

        let api = api.clone();
        let locale = i18n.locale_untracked();
        let session = auth.session.get_untracked();
        let submitted = form.get_untracked();
        spawn_local(async move {
            match submit_profile(&api, &session, locale, &submitted).await {
                Ok(ProfileOutcome::Updated(session)) => {
                    replace_session(auth, session);
                    form.update(|f| {
                        f.current_password.clear();
                        f.new_password.clear();
                        f.confirm_password.clear();
                    });
                    set_notice.set(Some(Notice::Success(i18n.t("settings.success"))));
                }
                Ok(ProfileOutcome::PasswordChanged) => {
                    BrowserPrompter.alert(&i18n.t("settings.passwordChanged"));
                    // 存储已清空；路由服务监听到状态变化后跳转到登录页
                    replace_session(auth, Session::Unauthenticated);
                }
                Err(ApiError::Validation(message)) => set_notice.set(Some(Notice::Error(message))),
                Err(e) => {
                    tracing::warn!(error = %e, "profile update failed");
                    // 服务端给出的文本优先
                    let text = if e.status_code().is_some() {
                        e.user_message()
                    } else {
                        i18n.t("settings.failed")
                    };
                    set_notice.set(Some(Notice::Error(text)));
                }
            }
            set_saving.set(false);
        });
    };

    let display_name = Signal::derive(move || form.with(|f| f.full_name.clone()));

    view! {
        <h1 class="text-2xl font-bold">{move || i18n.t("settings.title")}</h1>

        <div class="card bg-base-100 shadow-xl max-w-2xl">
            <form class="card-body space-y-2" on:submit=on_submit>
                <div class="flex items-center gap-3 mb-2">
                    <Avatar name=display_name />
                    <span class="font-semibold">
                        {move || auth.user().map(|u| u.username).unwrap_or_default()}
                    </span>
                </div>

                <ProfileField
                    input_id="full_name"
                    label_key="settings.fullName"
                    kind="text"
                    value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                    on_input=move |v: String| form.update(|f| f.full_name = v)
                />
                <ProfileField
                    input_id="email"
                    label_key="settings.email"
                    kind="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                />
                <ProfileField
                    input_id="current_password"
                    label_key="settings.currentPassword"
                    kind="password"
                    value=Signal::derive(move || form.with(|f| f.current_password.clone()))
                    on_input=move |v: String| form.update(|f| f.current_password = v)
                />
                <ProfileField
                    input_id="new_password"
                    label_key="settings.newPassword"
                    kind="password"
                    value=Signal::derive(move || form.with(|f| f.new_password.clone()))
                    on_input=move |v: String| form.update(|f| f.new_password = v)
                />
                <ProfileField
                    input_id="confirm_password"
                    label_key="settings.confirmPassword"
                    kind="password"
                    value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                    on_input=move |v: String| form.update(|f| f.confirm_password = v)
                />

                {move || notice.get().map(|n| match n {
                    Notice::Success(text) => view! {
                        <div role="alert" class="alert alert-success text-sm py-2"><span>{text}</span></div>
                    }.into_any(),
                    Notice::Error(text) => view! {
                        <div role="alert" class="alert alert-error text-sm py-2"><span>{text}</span></div>
                    }.into_any(),
                })}

                <div class="form-control mt-4">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() {
                            view! { <span class="loading loading-spinner"></span> {i18n.t("settings.saving")} }.into_any()
                        } else {
                            i18n.t("settings.save").into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
