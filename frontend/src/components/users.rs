use assetdesk::filter::{ListFilter, UserFilter};
use assetdesk::pages::users::delete_user;
use assetdesk::pages::{DeleteOutcome, Editor};
use assetdesk::shared::{DepartmentId, User, UserId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::avatar::Avatar;
use crate::components::icons::*;
use crate::components::user_dialog::UserDialog;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;

#[component]
pub fn UsersPage() -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = StoredValue::new(use_api());

    let search = RwSignal::new(String::new());
    let department = RwSignal::new(Option::<DepartmentId>::None);
    let editor = RwSignal::new(Editor::<User>::default());

    let visible = move || {
        let filter = UserFilter {
            search: search.get(),
            department: department.get(),
        };
        data.inventory
            .with(|inv| filter.apply(&inv.users).into_iter().cloned().collect::<Vec<_>>())
    };

    let handle_delete = move |user_id: UserId| {
        let api = api.get_value();
        let locale = i18n.locale_untracked();
        let inventory = data.inventory.get_untracked();
        spawn_local(async move {
            let outcome = delete_user(&api, &BrowserPrompter, locale, &inventory, user_id).await;
            if let DeleteOutcome::Deleted(snapshot) = outcome {
                data.apply(snapshot);
            }
        });
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-2xl font-bold">{move || i18n.t("users.title")}</h1>
            <button class="btn btn-primary gap-2" on:click=move |_| editor.update(Editor::open_new)>
                <Plus attr:class="h-4 w-4" />
                {move || i18n.t("users.add")}
            </button>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body grid md:grid-cols-2 gap-4">
                <div class="form-control">
                    <label for="user_search" class="label">
                        <span class="label-text">{move || i18n.t("users.search")}</span>
                    </label>
                    <input id="user_search"
                        type="search"
                        placeholder=move || i18n.t("users.searchPlaceholder")
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=move || search.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{move || i18n.t("users.filterDepartment")}</span>
                    </label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| department.set(event_target_value(&ev).parse::<DepartmentId>().ok())
                    >
                        <option value="" selected=move || department.get().is_none()>
                            {move || i18n.t("users.allDepartments")}
                        </option>
                        {move || data.inventory.with(|inv| {
                            inv.departments
                                .iter()
                                .map(|d| {
                                    let id = d.id;
                                    let label = i18n.t_with(
                                        "users.departmentOption",
                                        &[("name", &d.name), ("count", &d.employee_count.to_string())],
                                    );
                                    view! {
                                        <option value=id.to_string() selected=move || department.get() == Some(id)>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        })}
                    </select>
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("users.table.name")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("users.table.email")}</th>
                                <th>{move || i18n.t("users.table.department")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("users.table.assets")}</th>
                                <th>{move || i18n.t("users.table.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible().is_empty() && !data.loading.get()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        {move || i18n.t("users.empty")}
                                    </td>
                                </tr>
                            </Show>
                            {move || visible()
                                .into_iter()
                                .map(|user| {
                                    let user_id = user.id;
                                    let asset_count = move || {
                                        user_id
                                            .map(|id| data.inventory.with(|inv| inv.assets_assigned_to(id)))
                                            .unwrap_or(0)
                                    };
                                    let for_edit = user.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <Avatar name=user.name.clone() />
                                                    <span class="font-bold">{user.name.clone()}</span>
                                                </div>
                                            </td>
                                            <td class="hidden md:table-cell">{user.email.clone()}</td>
                                            <td>{user.department_name.clone().unwrap_or_default()}</td>
                                            <td class="hidden md:table-cell">
                                                <span class="badge badge-neutral">{asset_count}</span>
                                            </td>
                                            <td>
                                                <div class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square"
                                                        title=move || i18n.t("common.edit")
                                                        on:click=move |_| editor.update(|e| e.open_edit(for_edit.clone()))
                                                    >
                                                        <Pencil attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        title=move || i18n.t("common.delete")
                                                        disabled=user_id.is_none()
                                                        on:click=move |_| {
                                                            if let Some(id) = user_id {
                                                                handle_delete(id);
                                                            }
                                                        }
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <UserDialog editor=editor />
    }
}
