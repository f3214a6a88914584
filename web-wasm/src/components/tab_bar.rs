//! タブバーコンポーネント

use leptos::prelude::*;
use qr_studio_common::{translate, Language, Tab, TextKey};

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab-active" } else { "tab" }
}

#[component]
pub fn TabBar<F>(
    #[prop(into)] active_tab: Signal<Tab>,
    #[prop(into)] lang: Signal<Language>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Tab) + 'static + Clone,
{
    let tabs = [
        (Tab::Read, "⌗", TextKey::TabRead),
        (Tab::Generate, "▣", TextKey::TabGen),
    ];

    view! {
        <nav class="tab-bar">
            {tabs
                .into_iter()
                .map(|(tab, icon, key)| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class=move || tab_class(active_tab.get() == tab)
                            on:click=move |_| on_select(tab)
                        >
                            <span class="tab-icon">{icon}</span>
                            {move || translate(lang.get(), key)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
