use assetdesk::filter::{DepartmentFilter, ListFilter};
use assetdesk::pages::departments::delete_department;
use assetdesk::pages::{DeleteOutcome, Editor};
use assetdesk::shared::{Department, DepartmentId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::department_dialog::DepartmentDialog;
use crate::components::icons::*;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = StoredValue::new(use_api());

    let search = RwSignal::new(String::new());
    let editor = RwSignal::new(Editor::<Department>::default());

    let visible = move || {
        let filter = DepartmentFilter { search: search.get() };
        data.inventory
            .with(|inv| filter.apply(&inv.departments).into_iter().cloned().collect::<Vec<_>>())
    };

    let handle_delete = move |id: DepartmentId| {
        let api = api.get_value();
        let locale = i18n.locale_untracked();
        let inventory = data.inventory.get_untracked();
        spawn_local(async move {
            let outcome = delete_department(&api, &BrowserPrompter, locale, &inventory, id).await;
            if let DeleteOutcome::Deleted(snapshot) = outcome {
                data.apply(snapshot);
            }
        });
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-2xl font-bold">{move || i18n.t("departments.title")}</h1>
            <button class="btn btn-primary gap-2" on:click=move |_| editor.update(Editor::open_new)>
                <Plus attr:class="h-4 w-4" />
                {move || i18n.t("departments.add")}
            </button>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="form-control">
                    <label for="department_search" class="label">
                        <span class="label-text">{move || i18n.t("departments.search")}</span>
                    </label>
                    <input id="department_search"
                        type="search"
                        placeholder=move || i18n.t("departments.searchPlaceholder")
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=move || search.get()
                        class="input input-bordered w-full"
                    />
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("departments.table.name")}</th>
                                <th>{move || i18n.t("departments.table.employees")}</th>
                                <th>{move || i18n.t("departments.table.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible().is_empty() && !data.loading.get()>
                                <tr>
                                    <td colspan="3" class="text-center py-8 text-base-content/50">
                                        {move || i18n.t("departments.empty")}
                                    </td>
                                </tr>
                            </Show>
                            {move || visible()
                                .into_iter()
                                .map(|department| {
                                    let id = department.id;
                                    let for_edit = department.clone();
                                    view! {
                                        <tr>
                                            <td class="font-bold">{department.name.clone()}</td>
                                            <td>
                                                <span class="badge badge-neutral">{department.employee_count}</span>
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
                                                        on:click=move |_| handle_delete(id)
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

        <DepartmentDialog editor=editor />
    }
}
