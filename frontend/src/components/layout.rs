//! 应用外壳：侧边导航 + 顶栏
//!
//! 顶栏提供语言切换、主题切换、当前管理员头像与注销。

use assetdesk::Locale;
use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::avatar::Avatar;
use crate::components::icons::*;
use crate::i18n::use_i18n;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// 侧边栏条目
#[component]
fn NavItem(to: AppRoute, label_key: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    let router = use_router();
    let section = to.section();

    let class = Signal::derive(move || {
        let active = router.current_route().with(|r| r.section() == section);
        if active {
            "flex items-center gap-3 px-4 py-2 rounded-lg bg-primary text-primary-content".to_string()
        } else {
            "flex items-center gap-3 px-4 py-2 rounded-lg hover:bg-base-200".to_string()
        }
    });

    view! {
        <li>
            <Link to=to class=class>
                {children()}
                <span>{move || i18n.t(label_key)}</span>
            </Link>
        </li>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();
    let auth = use_auth();

    let display_name = Signal::derive(move || {
        auth.session
            .with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default())
    });

    let on_locale_change = move |ev: leptos::ev::Event| {
        if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
            i18n.set_locale(locale);
        }
    };

    view! {
        <div class="min-h-screen flex bg-base-200 font-sans">
            <aside class="w-60 shrink-0 bg-base-100 shadow-xl hidden md:flex flex-col">
                <div class="p-6 text-xl font-bold text-primary">
                    {move || i18n.t("header.title")}
                </div>
                <ul class="flex flex-col gap-1 px-3">
                    <NavItem to=AppRoute::Dashboard label_key="nav.dashboard">
                        <LayoutDashboard attr:class="h-5 w-5" />
                    </NavItem>
                    <NavItem to=AppRoute::Assets label_key="nav.assets">
                        <Laptop attr:class="h-5 w-5" />
                    </NavItem>
                    <NavItem to=AppRoute::Users label_key="nav.users">
                        <UsersIcon attr:class="h-5 w-5" />
                    </NavItem>
                    <NavItem to=AppRoute::Departments label_key="nav.departments">
                        <Building attr:class="h-5 w-5" />
                    </NavItem>
                    <NavItem to=AppRoute::Settings label_key="nav.settings">
                        <Cog attr:class="h-5 w-5" />
                    </NavItem>
                </ul>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <header class="navbar bg-base-100 shadow px-4 gap-2">
                    <div class="flex-1 font-semibold md:hidden">{move || i18n.t("header.title")}</div>
                    <div class="flex-1 hidden md:block"></div>

                    <select
                        class="select select-bordered select-sm"
                        aria-label=move || i18n.t("header.language")
                        on:change=on_locale_change
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|locale| {
                                view! {
                                    <option
                                        value=locale.code()
                                        selected=move || i18n.locale() == locale
                                    >
                                        {locale.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <button
                        class="btn btn-ghost btn-circle"
                        title=move || i18n.t("header.toggleTheme")
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.theme.get().is_dark() {
                            view! { <Sun attr:class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Moon attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>

                    <div class="flex items-center gap-2">
                        <Avatar name=display_name />
                        <span class="hidden lg:inline text-sm">{move || display_name.get()}</span>
                    </div>

                    <button class="btn btn-outline btn-error btn-sm gap-2" on:click=move |_| logout(auth)>
                        <LogOut attr:class="h-4 w-4" />
                        {move || i18n.t("header.logout")}
                    </button>
                </header>

                <main class="p-4 md:p-8 max-w-7xl w-full mx-auto space-y-6">
                    {children()}
                </main>
            </div>
        </div>
    }
}
