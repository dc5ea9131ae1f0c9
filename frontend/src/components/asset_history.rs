//! 资产历史：表格与弹窗

use assetdesk::dashboard::status_color;
use assetdesk::pages::assets::{HistoryRow, history_rows, history_title};
use assetdesk::shared::Asset;
use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::data::use_inventory;
use crate::i18n::use_i18n;

/// 按日期倒序的历史表格
#[component]
pub fn HistoryTable(#[prop(into)] rows: Signal<Vec<HistoryRow>>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        {move || if rows.with(Vec::is_empty) {
            view! {
                <p class="py-6 text-center text-base-content/50">{i18n.t("assets.history.noHistory")}</p>
            }.into_any()
        } else {
            view! {
                <div class="overflow-x-auto w-full">
                    <table class="table table-sm w-full">
                        <thead>
                            <tr>
                                <th>{i18n.t("assets.history.date")}</th>
                                <th>{i18n.t("assets.history.status")}</th>
                                <th>{i18n.t("assets.history.user")}</th>
                                <th>{i18n.t("assets.history.notes")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.get()
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td class="font-mono text-sm">{row.date.to_string()}</td>
                                        <td>
                                            <span
                                                class="badge text-white border-none"
                                                style:background-color=status_color(row.status)
                                            >
                                                {row.status.as_str()}
                                            </span>
                                        </td>
                                        <td>{row.user_label().to_string()}</td>
                                        <td class="text-sm">{row.notes.clone().unwrap_or_default()}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }.into_any()
        }}
    }
}

/// 列表页的历史弹窗；`asset` 为 `None` 时关闭
#[component]
pub fn HistoryDialog(asset: RwSignal<Option<Asset>>) -> impl IntoView {
    let i18n = use_i18n();
    let data = use_inventory();

    let open = Signal::derive(move || asset.with(Option::is_some));
    let title = Signal::derive(move || {
        let locale = i18n.locale();
        asset.with(|a| a.as_ref().map(|a| history_title(locale, a)).unwrap_or_default())
    });
    let rows = Signal::derive(move || {
        asset.with(|a| {
            a.as_ref()
                .map(|a| data.inventory.with(|inv| history_rows(a, inv)))
                .unwrap_or_default()
        })
    });

    view! {
        <Modal open=open title=title on_close=move |_| asset.set(None) wide=true>
            <HistoryTable rows=rows />
            <div class="modal-action">
                <button type="button" class="btn" on:click=move |_| asset.set(None)>
                    {move || i18n.t("common.close")}
                </button>
            </div>
        </Modal>
    }
}
