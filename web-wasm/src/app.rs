//! メインアプリケーションコンポーネント
//!
//! シェル状態（タブ・言語・テーマ・検証画像・リセットカウンタ）を持ち、
//! ヘッダー・タブバー・読み取り/作成パネルを組み立てる。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use qr_studio_common::{Language, Notification, ShellState, Tab, Theme};

use crate::components::{
    header::Header,
    qr_generator::QrGenerator,
    qr_reader::QrReader,
    tab_bar::TabBar,
};

/// パネルの表示クラス（非表示でもマウントは維持）
pub fn panel_class(visible: bool) -> &'static str {
    if visible { "panel block" } else { "panel hidden" }
}

/// ルート要素の `dark` クラスをテーマに合わせる
fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.root_class_enabled() {
        classes.add_1(Theme::ROOT_CLASS)
    } else {
        classes.remove_1(Theme::ROOT_CLASS)
    };
    if let Err(e) = result {
        gloo::console::warn!("theme class update failed:", e);
    }
}

/// シェル状態の各フィールド
///
/// 変化したときだけ子に伝わるよう個別にメモ化する。
#[derive(Clone, Copy)]
struct ShellMemos {
    active_tab: Memo<Tab>,
    lang: Memo<Language>,
    theme: Memo<Theme>,
    verification_image: Memo<Option<String>>,
    reset_key: Memo<u32>,
}

impl ShellMemos {
    fn new(shell: RwSignal<ShellState>) -> Self {
        Self {
            active_tab: Memo::new(move |_| shell.with(|s| s.active_tab())),
            lang: Memo::new(move |_| shell.with(|s| s.lang())),
            theme: Memo::new(move |_| shell.with(|s| s.theme())),
            verification_image: Memo::new(move |_| {
                shell.with(|s| s.verification_image().map(str::to_string))
            }),
            reset_key: Memo::new(move |_| shell.with(|s| s.reset_key())),
        }
    }
}

/// 検証依頼を反映し、表示する通知を返す
fn request_verification(shell: RwSignal<ShellState>, image: String) -> Option<Notification> {
    shell.try_update(|s| s.request_verification(image))
}

/// 確認してからリセット
///
/// 確認中は状態を借用せず、断られた場合はシグナルを更新しない。
fn request_reset<F>(shell: RwSignal<ShellState>, confirm: F) -> bool
where
    F: FnOnce(&str) -> bool,
{
    let Some(prompt) = shell.try_with_untracked(|s| s.reset_prompt()) else {
        return false;
    };
    if !confirm(prompt) {
        return false;
    }
    shell.update(|s| {
        s.reset_with(|_| true);
    });
    true
}

/// 両パネルの再マウント用キー
fn panel_keys(shell: RwSignal<ShellState>) -> (String, String) {
    shell.with_untracked(|s| (s.panel_key(Tab::Read), s.panel_key(Tab::Generate)))
}

#[component]
pub fn App() -> impl IntoView {
    let shell = RwSignal::new(ShellState::new());
    let ShellMemos {
        active_tab,
        lang,
        theme,
        verification_image,
        reset_key,
    } = ShellMemos::new(shell);

    Effect::new(move |_| apply_theme(theme.get()));

    let on_toggle_theme = move |_: ()| shell.update(|s| s.toggle_theme());
    let on_toggle_lang = move |_: ()| shell.update(|s| s.toggle_lang());
    let on_select_tab = move |tab: Tab| shell.update(|s| s.set_tab(tab));

    // 生成パネルからの検証依頼: 画像を渡して読み取りタブへ、少し後に通知
    let on_verify = move |image: String| {
        if let Some(notice) = request_verification(shell, image) {
            Timeout::new(notice.delay_ms, move || gloo::dialogs::alert(notice.message)).forget();
        }
    };

    let on_reset = move |_: ()| {
        if request_reset(shell, gloo::dialogs::confirm) {
            gloo::console::debug!("reset, key =", reset_key.get_untracked());
        }
    };

    view! {
        <div class="app min-h-screen flex flex-col">
            <Header
                lang=lang
                theme=theme
                on_reset=on_reset
                on_toggle_lang=on_toggle_lang
                on_toggle_theme=on_toggle_theme
            />

            <TabBar active_tab=active_tab lang=lang on_select=on_select_tab />

            <main class="main flex-1">
                // リセットカウンタが変わったら両パネルを作り直す
                {move || {
                    reset_key.track();
                    let (reader_key, gen_key) = panel_keys(shell);
                    view! {
                        <div
                            class=move || panel_class(active_tab.get() == Tab::Read)
                            data-key=reader_key
                        >
                            <QrReader lang=lang initial_image=verification_image />
                        </div>
                        <div
                            class=move || panel_class(active_tab.get() == Tab::Generate)
                            data-key=gen_key
                        >
                            <QrGenerator lang=lang on_verify=on_verify />
                        </div>
                    }
                }}
            </main>
        </div>
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_apply_theme_toggles_root_class() {
        let root = document().document_element().expect("document element");

        apply_theme(Theme::Dark);
        assert!(root.class_list().contains(Theme::ROOT_CLASS));

        apply_theme(Theme::Light);
        assert!(!root.class_list().contains(Theme::ROOT_CLASS));
    }
}
