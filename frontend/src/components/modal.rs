//! 基于 `<dialog>` 的模态框
//!
//! 打开状态由外部信号驱动；按 Esc 或点击遮罩关闭时回调 `on_close`。

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    /// 较宽的弹窗（表格、双栏表单）
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let box_class = if wide { "modal-box max-w-3xl" } else { "modal-box" };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class=box_class>
                <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
