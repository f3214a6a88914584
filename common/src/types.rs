//! 画面状態の列挙型
//!
//! CLIとWeb(WASM)で共有される型:
//! - Tab: 読み取り / 生成
//! - Language: 英語 / 日本語
//! - Theme: ライト / ダーク

use serde::{Deserialize, Serialize};

/// アクティブタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Read,
    Generate,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Read, Tab::Generate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Read => "read",
            Tab::Generate => "generate",
        }
    }
}

/// 表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Jp,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Jp,
            Language::Jp => Language::En,
        }
    }

    /// ヘッダーの切替ボタンに出すラベル
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Jp => "JP",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "jp" | "ja" | "japanese" => Ok(Language::Jp),
            _ => Err(format!("Unknown language: {}. Use en or jp", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Jp => write!(f, "jp"),
        }
    }
}

/// カラーテーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// ドキュメントルートに付与するクラス名
    pub const ROOT_CLASS: &'static str = "dark";

    /// ルート要素に `dark` クラスを付けるべきか
    pub fn root_class_enabled(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}. Use light or dark", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
