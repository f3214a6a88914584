//! ヘッダーコンポーネント

use leptos::prelude::*;
use qr_studio_common::{translate, Language, TextKey, Theme};

#[component]
pub fn Header<FR, FL, FT>(
    #[prop(into)] lang: Signal<Language>,
    #[prop(into)] theme: Signal<Theme>,
    on_reset: FR,
    on_toggle_lang: FL,
    on_toggle_theme: FT,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
    FL: Fn(()) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
{
    let t = move |key: TextKey| translate(lang.get(), key);

    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-icon">"▣"</div>
                    <h1>{move || t(TextKey::AppTitle)}</h1>
                </div>

                <div class="header-actions">
                    <button
                        class="icon-btn icon-btn-danger"
                        aria-label="Reset"
                        title=move || t(TextKey::Reset)
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "↺"
                    </button>
                    <div class="divider"></div>
                    <button
                        class="icon-btn"
                        aria-label="Toggle Language"
                        title=move || t(TextKey::ToggleLanguage)
                        on:click={
                            let on_toggle_lang = on_toggle_lang.clone();
                            move |_| on_toggle_lang(())
                        }
                    >
                        <span class="lang-label">"🌐 "{move || lang.get().label()}</span>
                    </button>
                    <button
                        class="icon-btn"
                        aria-label="Toggle Theme"
                        title=move || t(TextKey::ToggleTheme)
                        on:click={
                            let on_toggle_theme = on_toggle_theme.clone();
                            move |_| on_toggle_theme(())
                        }
                    >
                        {move || match theme.get() {
                            Theme::Light => "☾",
                            Theme::Dark => "☀",
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}
