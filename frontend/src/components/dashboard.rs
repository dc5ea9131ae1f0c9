use assetdesk::dashboard::{
    DEPARTMENT_COLORS, DashboardStats, DepartmentBucket, RECENT_ASSET_LIMIT, department_breakdown,
    recent_assets, status_breakdown, status_color,
};
use assetdesk::shared::Asset;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::data::use_inventory;
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 一行水平条形图
#[derive(Clone, PartialEq)]
struct Bar {
    label: String,
    count: usize,
    color: &'static str,
}

#[component]
fn BarChart(#[prop(into)] title: Signal<String>, #[prop(into)] bars: Signal<Vec<Bar>>) -> impl IntoView {
    let max = move || bars.with(|b| b.iter().map(|bar| bar.count).max().unwrap_or(0));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">{move || title.get()}</h3>
                <div class="space-y-3">
                    {move || bars
                        .get()
                        .into_iter()
                        .map(|bar| {
                            let count = bar.count;
                            let width = move || {
                                let max = max();
                                if max == 0 { 0 } else { count * 100 / max }
                            };
                            view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{bar.label}</span>
                                        <span class="font-mono">{count}</span>
                                    </div>
                                    <div class="w-full bg-base-200 rounded-full h-3">
                                        <div
                                            class="h-3 rounded-full"
                                            style:width=move || format!("{}%", width())
                                            style:background-color=bar.color
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] value: Signal<usize>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{move || title.get()}</div>
            <div class=format!("stat-value {}", accent)>{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();

    let stats = Memo::new(move |_| data.inventory.with(DashboardStats::compute));

    let status_bars = Signal::derive(move || {
        data.inventory.with(|inv| {
            status_breakdown(&inv.assets)
                .into_iter()
                .map(|(status, count)| Bar {
                    label: status.as_str().to_string(),
                    count,
                    color: status_color(status),
                })
                .collect::<Vec<_>>()
        })
    });

    let department_bars = Signal::derive(move || {
        let unassigned = i18n.t("common.unassigned");
        let unknown = i18n.t("common.unknown");
        data.inventory.with(|inv| {
            department_breakdown(inv)
                .into_iter()
                .enumerate()
                .map(|(i, (bucket, count))| Bar {
                    label: match bucket {
                        DepartmentBucket::Named(name) => name,
                        DepartmentBucket::Unassigned => unassigned.clone(),
                        DepartmentBucket::Unknown => unknown.clone(),
                    },
                    count,
                    color: DEPARTMENT_COLORS[i % DEPARTMENT_COLORS.len()],
                })
                .collect::<Vec<_>>()
        })
    });

    let recent = move || {
        data.inventory.with(|inv| {
            recent_assets(&inv.assets, RECENT_ASSET_LIMIT)
                .into_iter()
                .cloned()
                .collect::<Vec<Asset>>()
        })
    };

    view! {
        <h1 class="text-2xl font-bold">{move || i18n.t("dashboard.title")}</h1>

        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <StatCard
                title=Signal::derive(move || i18n.t("dashboard.totalAssets"))
                value=Signal::derive(move || stats.get().total_assets)
                accent="text-primary"
            />
            <StatCard
                title=Signal::derive(move || i18n.t("dashboard.assetsInUse"))
                value=Signal::derive(move || stats.get().assets_in_use)
                accent="text-success"
            />
            <StatCard
                title=Signal::derive(move || i18n.t("dashboard.assetsInRepair"))
                value=Signal::derive(move || stats.get().assets_in_repair)
                accent="text-warning"
            />
            <StatCard
                title=Signal::derive(move || i18n.t("dashboard.totalUsers"))
                value=Signal::derive(move || stats.get().total_users)
                accent="text-secondary"
            />
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <BarChart title=Signal::derive(move || i18n.t("dashboard.assetsByStatus")) bars=status_bars />
            <BarChart title=Signal::derive(move || i18n.t("dashboard.assetsByDepartment")) bars=department_bars />
        </div>

        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <h3 class="card-title p-6 pb-2">{move || i18n.t("dashboard.recentAssets")}</h3>
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("assets.table.id")}</th>
                                <th>{move || i18n.t("assets.table.name")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("assets.table.category")}</th>
                                <th>{move || i18n.t("assets.table.status")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("assets.table.purchaseDate")}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || recent()
                                .into_iter()
                                .map(|asset| {
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
                                            <td class="hidden md:table-cell">{asset.purchase_date.to_string()}</td>
                                            <td>
                                                <Link to=AppRoute::AssetDetail(asset.id.clone()) class="btn btn-ghost btn-sm btn-square">
                                                    <Eye attr:class="h-4 w-4" />
                                                </Link>
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
    }
}
