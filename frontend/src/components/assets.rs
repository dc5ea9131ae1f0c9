use assetdesk::dashboard::status_color;
use assetdesk::filter::{AssetFilter, ListFilter};
use assetdesk::pages::assets::delete_asset;
use assetdesk::pages::{DeleteOutcome, Editor};
use assetdesk::shared::{Asset, AssetStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::asset_dialog::AssetDialog;
use crate::components::asset_history::HistoryDialog;
use crate::components::icons::*;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::BrowserPrompter;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn AssetsPage() -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();
    let api = StoredValue::new(use_api());

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<AssetStatus>::None);
    let editor = RwSignal::new(Editor::<Asset>::default());
    let history = RwSignal::new(Option::<Asset>::None);

    let visible = move || {
        let filter = AssetFilter {
            search: search.get(),
            status: status.get(),
        };
        data.inventory
            .with(|inv| filter.apply(&inv.assets).into_iter().cloned().collect::<Vec<_>>())
    };

    let handle_delete = move |id: String| {
        let api = api.get_value();
        let locale = i18n.locale_untracked();
        spawn_local(async move {
            if let DeleteOutcome::Deleted(snapshot) = delete_asset(&api, &BrowserPrompter, locale, &id).await {
                data.apply(snapshot);
            }
        });
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-2xl font-bold">{move || i18n.t("assets.title")}</h1>
            <button class="btn btn-primary gap-2" on:click=move |_| editor.update(Editor::open_new)>
                <Plus attr:class="h-4 w-4" />
                {move || i18n.t("assets.add")}
            </button>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body grid md:grid-cols-2 gap-4">
                <div class="form-control">
                    <label for="asset_search" class="label">
                        <span class="label-text">{move || i18n.t("assets.search")}</span>
                    </label>
                    <input id="asset_search"
                        type="search"
                        placeholder=move || i18n.t("assets.searchPlaceholder")
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=move || search.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{move || i18n.t("assets.filterStatus")}</span>
                    </label>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| status.set(event_target_value(&ev).parse::<AssetStatus>().ok())
                    >
                        <option value="" selected=move || status.get().is_none()>
                            {move || i18n.t("assets.allStatuses")}
                        </option>
                        {AssetStatus::ALL
                            .iter()
                            .copied()
                            .map(|s| view! {
                                <option value=s.as_str() selected=move || status.get() == Some(s)>
                                    {s.as_str()}
                                </option>
                            })
                            .collect_view()}
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
                                <th>{move || i18n.t("assets.table.id")}</th>
                                <th>{move || i18n.t("assets.table.name")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("assets.table.category")}</th>
                                <th>{move || i18n.t("assets.table.status")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("assets.table.assignedTo")}</th>
                                <th class="hidden lg:table-cell">{move || i18n.t("assets.table.purchaseDate")}</th>
                                <th>{move || i18n.t("assets.table.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible().is_empty() && !data.loading.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        {move || i18n.t("assets.empty")}
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || data.loading.get() && data.inventory.with(|inv| inv.assets.is_empty())>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " " {move || i18n.t("common.loading")}
                                    </td>
                                </tr>
                            </Show>
                            // 重新加载后整表重绘，行内容随快照更新
                            {move || visible()
                                .into_iter()
                                .map(|asset| {
                                    let assigned = asset.assigned_to;
                                    let assignee = move || {
                                        data.inventory
                                            .with(|inv| inv.user_name(assigned).map(str::to_string))
                                            .unwrap_or_else(|| i18n.t("common.unassigned"))
                                    };
                                    let id = asset.id.clone();
                                    let for_edit = asset.clone();
                                    let for_history = asset.clone();
                                    view! {
                                        <tr>
                                            <td class="font-mono text-sm">{asset.id.clone()}</td>
                                            <td class="font-bold">{asset.name.clone()}</td>
                                            <td class="hidden md:table-cell">{asset.category.as_str()}</td>
                                            <td>
                                                <span
                                                    class="badge text-white border-none"
                                                    style:background-color=status_color(asset.status)
                                                >
                                                    {asset.status.as_str()}
                                                </span>
                                            </td>
                                            <td class="hidden md:table-cell">{assignee}</td>
                                            <td class="hidden lg:table-cell">{asset.purchase_date.to_string()}</td>
                                            <td>
                                                <div class="flex gap-1">
                                                    <Link to=AppRoute::AssetDetail(asset.id.clone()) class="btn btn-ghost btn-sm btn-square">
                                                        <Eye attr:class="h-4 w-4" />
                                                    </Link>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square"
                                                        title=move || i18n.t("common.history")
                                                        on:click=move |_| history.set(Some(for_history.clone()))
                                                    >
                                                        <HistoryIcon attr:class="h-4 w-4" />
                                                    </button>
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
                                                        on:click=move |_| handle_delete(id.clone())
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

        <AssetDialog editor=editor />
        <HistoryDialog asset=history />
    }
}
