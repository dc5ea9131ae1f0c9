use assetdesk::shared::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::i18n::use_i18n;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let i18n = use_i18n();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some(i18n.t("common.requiredFields")));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let credentials = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        spawn_local(async move {
            // 成功后路由服务监听到认证状态变化，自动跳转到仪表盘
            if login(auth, &api, credentials).await.is_err() {
                set_error_msg.set(Some(i18n.t("login.invalid")));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{move || i18n.t("header.title")}</h1>
                        <p class="text-base-content/70">{move || i18n.t("login.subtitle")}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">{move || i18n.t("login.title")}</h2>
                        {move || error_msg.get().map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">{move || i18n.t("login.username")}</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || i18n.t("login.password")}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> {i18n.t("login.submitting")} }.into_any()
                                } else {
                                    i18n.t("login.submit").into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
