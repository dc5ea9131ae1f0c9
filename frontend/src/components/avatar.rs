use assetdesk::avatar::generate_avatar;
use leptos::prelude::*;

/// 圆形首字母头像
#[component]
pub fn Avatar(#[prop(into)] name: Signal<String>) -> impl IntoView {
    let avatar = Memo::new(move |_| generate_avatar(&name.get()));

    view! {
        <div
            class="w-9 h-9 rounded-full flex items-center justify-center text-white text-sm font-semibold select-none"
            style:background-color=move || avatar.get().color
            title=move || name.get()
        >
            {move || avatar.get().initials}
        </div>
    }
}
