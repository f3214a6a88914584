//! アプリケーションシェルの状態
//!
//! アクティブタブ・言語・テーマ・検証用画像・リセットカウンタを保持し、
//! ヘッダー/タブ操作による状態遷移をまとめる。描画はWeb側（Leptos）と
//! CLIの対話モードがそれぞれ行う。

use crate::i18n::{translate, TextKey};
use crate::types::{Language, Tab, Theme};

/// 検証依頼から通知表示までの遅延
pub const VERIFY_NOTICE_DELAY_MS: u32 = 100;

/// 遅延表示する通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: &'static str,
    pub delay_ms: u32,
}

/// シェルの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    active_tab: Tab,
    lang: Language,
    theme: Theme,
    verification_image: Option<String>,
    reset_key: u32,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定から言語・テーマを引き継いで開始
    pub fn with_preferences(lang: Language, theme: Theme) -> Self {
        Self {
            lang,
            theme,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn verification_image(&self) -> Option<&str> {
        self.verification_image.as_deref()
    }

    pub fn reset_key(&self) -> u32 {
        self.reset_key
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_lang(&mut self) {
        self.lang = self.lang.toggle();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// 生成パネルからの検証依頼
    ///
    /// 画像を保持して読み取りタブへ切り替え、依頼時点の言語で
    /// 成功通知を返す。通知は後からリセットされても取り消されない。
    pub fn request_verification(&mut self, image: impl Into<String>) -> Notification {
        self.verification_image = Some(image.into());
        self.active_tab = Tab::Read;
        Notification {
            message: self.t(TextKey::VerificationSuccess),
            delay_ms: VERIFY_NOTICE_DELAY_MS,
        }
    }

    /// リセット確認メッセージ（現在の言語）
    pub fn reset_prompt(&self) -> &'static str {
        self.t(TextKey::ResetConfirm)
    }

    /// 確認付きリセット
    ///
    /// `confirm` に確認メッセージを渡し、`true` の場合のみ
    /// カウンタを進めて検証画像を消し、読み取りタブへ戻す。
    pub fn reset_with<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(self.reset_prompt()) {
            return false;
        }
        self.reset_key += 1;
        self.verification_image = None;
        self.active_tab = Tab::Read;
        true
    }

    /// 現在の言語で文字列を引く
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.lang, key)
    }

    /// パネルを表示するか（非表示でもマウントは維持）
    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// リセットごとに変わるパネルの再マウント用キー
    pub fn panel_key(&self, tab: Tab) -> String {
        match tab {
            Tab::Read => format!("reader-{}", self.reset_key),
            Tab::Generate => format!("gen-{}", self.reset_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn customized() -> ShellState {
        let mut state = ShellState::new();
        state.toggle_lang();
        state.toggle_theme();
        state.request_verification(IMAGE);
        state.set_tab(Tab::Generate);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ShellState::new();
        assert_eq!(state.active_tab(), Tab::Read);
        assert_eq!(state.lang(), Language::En);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.verification_image(), None);
        assert_eq!(state.reset_key(), 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = ShellState::new();
        state.toggle_lang();
        assert_eq!(state.lang(), Language::Jp);
        state.toggle_lang();
        assert_eq!(state.lang(), Language::En);

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_verify_request_switches_to_reader() {
        let mut state = ShellState::new();
        state.set_tab(Tab::Generate);

        let notice = state.request_verification(IMAGE);

        assert_eq!(state.verification_image(), Some(IMAGE));
        assert_eq!(state.active_tab(), Tab::Read);
        assert_eq!(notice.delay_ms, VERIFY_NOTICE_DELAY_MS);
        assert_eq!(notice.message, translate(Language::En, TextKey::VerificationSuccess));
    }

    #[test]
    fn test_verify_request_overwrites_previous_image() {
        let mut state = ShellState::new();
        state.request_verification("data:image/png;base64,AAAA");
        state.request_verification(IMAGE);
        assert_eq!(state.verification_image(), Some(IMAGE));
    }

    #[test]
    fn test_verify_notice_uses_language_at_request_time() {
        let mut state = ShellState::new();
        state.toggle_lang();
        let notice = state.request_verification(IMAGE);
        state.toggle_lang();
        assert_eq!(notice.message, translate(Language::Jp, TextKey::VerificationSuccess));
    }

    #[test]
    fn test_reset_confirmed() {
        let mut state = customized();
        let before = state.reset_key();

        let mut asked = String::new();
        let done = state.reset_with(|msg| {
            asked = msg.to_string();
            true
        });

        assert!(done);
        assert_eq!(asked, "すべてのデータをリセットしますか？");
        assert_eq!(state.verification_image(), None);
        assert_eq!(state.active_tab(), Tab::Read);
        assert!(state.reset_key() > before);
        assert_ne!(state.panel_key(Tab::Read), format!("reader-{}", before));
        // 言語とテーマはリセット対象外
        assert_eq!(state.lang(), Language::Jp);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_reset_declined_changes_nothing() {
        let mut state = customized();
        let before = state.clone();

        let done = state.reset_with(|msg| {
            assert_eq!(msg, "すべてのデータをリセットしますか？");
            false
        });

        assert!(!done);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_prompt_follows_language() {
        let mut state = ShellState::new();
        assert_eq!(state.reset_prompt(), "Reset all data?");
        state.toggle_lang();
        assert_eq!(state.reset_prompt(), "すべてのデータをリセットしますか？");
    }

    #[test]
    fn test_tab_switch_keeps_other_state() {
        let mut state = customized();
        let (lang, theme) = (state.lang(), state.theme());

        for tab in [Tab::Read, Tab::Generate, Tab::Read] {
            state.set_tab(tab);
            assert_eq!(state.active_tab(), tab);
            assert_eq!(state.lang(), lang);
            assert_eq!(state.theme(), theme);
            assert_eq!(state.verification_image(), Some(IMAGE));
        }
    }

    #[test]
    fn test_only_active_panel_visible() {
        let mut state = ShellState::new();
        assert!(state.is_visible(Tab::Read));
        assert!(!state.is_visible(Tab::Generate));
        state.set_tab(Tab::Generate);
        assert!(!state.is_visible(Tab::Read));
        assert!(state.is_visible(Tab::Generate));
    }

    #[test]
    fn test_panel_keys_change_only_on_reset() {
        let mut state = ShellState::new();
        assert_eq!(state.panel_key(Tab::Read), "reader-0");
        assert_eq!(state.panel_key(Tab::Generate), "gen-0");

        state.set_tab(Tab::Generate);
        state.toggle_lang();
        assert_eq!(state.panel_key(Tab::Read), "reader-0");

        state.reset_with(|_| true);
        assert_eq!(state.panel_key(Tab::Read), "reader-1");
        assert_eq!(state.panel_key(Tab::Generate), "gen-1");
    }

    #[test]
    fn test_t_follows_language() {
        let mut state = ShellState::new();
        for &key in TextKey::ALL {
            assert_eq!(state.t(key), translate(Language::En, key));
        }
        state.toggle_lang();
        for &key in TextKey::ALL {
            assert_eq!(state.t(key), translate(Language::Jp, key));
        }
    }

    #[test]
    fn test_with_preferences() {
        let state = ShellState::with_preferences(Language::Jp, Theme::Dark);
        assert_eq!(state.lang(), Language::Jp);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.active_tab(), Tab::Read);
    }
}
