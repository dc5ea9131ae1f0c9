//! 资产详情页
//!
//! 详情单独请求 `GET /assets/{id}` 以取得完整历史；持有人信息从内存快照解析。

use assetdesk::ApiResult;
use assetdesk::dashboard::status_color;
use assetdesk::pages::assets::{history_rows, load_asset_detail};
use assetdesk::shared::Asset;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::asset_history::HistoryTable;
use crate::components::avatar::Avatar;
use crate::components::icons::ArrowLeft;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
fn Field(label_key: &'static str, value: String) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div>
            <div class="text-sm text-base-content/60">{move || i18n.t(label_key)}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}

#[component]
fn AssetDetailView(asset: Asset) -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();

    let assigned = asset.assigned_to;
    let owner = Memo::new(move |_| {
        data.inventory
            .with(|inv| assigned.and_then(|id| inv.user(id)).cloned())
    });

    let asset_id = asset.id.clone();
    let rows = {
        let asset = asset.clone();
        Signal::derive(move || data.inventory.with(|inv| history_rows(&asset, inv)))
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold">{asset.name.clone()}</h1>
                <p class="font-mono text-sm text-base-content/60">
                    {move || i18n.t_with("assets.detail.assetId", &[("id", &asset_id)])}
                </p>
            </div>
            <span class="badge badge-lg text-white border-none" style:background-color=status_color(asset.status)>
                {asset.status.as_str()}
            </span>
        </div>

        <div class="grid md:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow-xl md:col-span-2">
                <div class="card-body">
                    <h3 class="card-title">{move || i18n.t("assets.detail.assetDetails")}</h3>
                    <div class="grid grid-cols-2 gap-4">
                        <Field label_key="assets.modal.category" value=asset.category.as_str().to_string() />
                        <Field label_key="assets.modal.vendor" value=asset.vendor.clone() />
                        <Field label_key="assets.modal.purchaseDate" value=asset.purchase_date.to_string() />
                        <Field
                            label_key="assets.modal.warrantyExpiry"
                            value=asset.warranty_expiry.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
                        />
                    </div>

                    <h3 class="card-title mt-4">{move || i18n.t("assets.detail.specificationsNotes")}</h3>
                    <div class="grid grid-cols-2 gap-4">
                        <Field label_key="assets.modal.specs" value=asset.specs.clone().unwrap_or_else(|| "-".to_string()) />
                        <Field label_key="assets.modal.notes" value=asset.notes.clone().unwrap_or_else(|| "-".to_string()) />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">{move || i18n.t("assets.detail.assignedTo")}</h3>
                    {move || match owner.get() {
                        Some(user) => view! {
                            <div class="flex items-center gap-3">
                                <Avatar name=user.name.clone() />
                                <div>
                                    <div class="font-bold">{user.name.clone()}</div>
                                    <div class="text-sm text-base-content/60">{user.email.clone()}</div>
                                    <div class="text-sm">{user.department_name.clone().unwrap_or_default()}</div>
                                </div>
                            </div>
                        }.into_any(),
                        None => view! {
                            <p class="text-base-content/60">{i18n.t("assets.detail.unassigned")}</p>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">{move || i18n.t("assets.detail.history")}</h3>
                <HistoryTable rows=rows />
            </div>
        </div>
    }
}

#[component]
pub fn AssetDetailPage(id: String) -> impl IntoView {
    let i18n = use_i18n();
    let api = use_api();

    // None 表示加载中
    let (detail, set_detail) = signal(Option::<ApiResult<Asset>>::None);

    {
        let id = id.clone();
        spawn_local(async move {
            let result = load_asset_detail(&api, &id).await;
            if let Err(e) = &result {
                tracing::warn!(asset = %id, error = %e, "asset detail failed to load");
            }
            set_detail.set(Some(result));
        });
    }

    view! {
        <Link to=AppRoute::Assets class="btn btn-ghost btn-sm gap-2 w-fit">
            <ArrowLeft attr:class="h-4 w-4" />
            {move || i18n.t("assets.detail.back")}
        </Link>

        {move || match detail.get() {
            None => view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }.into_any(),
            Some(Ok(asset)) => view! { <AssetDetailView asset=asset /> }.into_any(),
            Some(Err(_)) => view! {
                <div role="alert" class="alert alert-error">
                    <span>{i18n.t_with("assets.detail.notFound", &[("id", &id)])}</span>
                </div>
            }.into_any(),
        }}
    }
}
