use crate::error::{QrStudioError, Result};
use qr_studio_common::{translate, EcLevel, GenerateOptions, Language, TextKey, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub theme: Theme,
    pub default_size: u32,
    pub default_margin: u32,
    pub default_ec_level: EcLevel,
}

impl Default for Config {
    fn default() -> Self {
        let opts = GenerateOptions::default();
        Self {
            language: Language::En,
            theme: Theme::Light,
            default_size: opts.size,
            default_margin: opts.margin,
            default_ec_level: opts.ec_level,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QrStudioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("qr-studio").join("config.json"))
    }

    /// 設定内容の表示用テキスト（設定中の言語）
    pub fn summary(&self) -> String {
        let t = |key| translate(self.language, key);
        [
            format!("{}:", t(TextKey::Settings)),
            format!("  {}: {}", t(TextKey::LanguageLabel), self.language),
            format!("  {}: {}", t(TextKey::ThemeLabel), self.theme),
            format!("  {}: {}", t(TextKey::Size), self.default_size),
            format!("  {}: {}", t(TextKey::Margin), self.default_margin),
            format!("  {}: {}", t(TextKey::ErrorCorrection), self.default_ec_level),
        ]
        .join("\n")
    }

    /// 設定値をもとにした生成オプション（色はデフォルト）
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            size: self.default_size,
            margin: self.default_margin,
            ec_level: self.default_ec_level,
            ..GenerateOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            language: Language::Jp,
            theme: Theme::Dark,
            default_size: 512,
            default_margin: 2,
            default_ec_level: EcLevel::H,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "language": "jp" }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.language, Language::Jp);
        assert_eq!(loaded.default_size, 256);
        assert_eq!(loaded.default_ec_level, EcLevel::M);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(QrStudioError::JsonParse(_))));
    }

    #[test]
    fn test_summary_follows_language() {
        let config = Config { default_ec_level: EcLevel::H, ..Default::default() };
        let summary = config.summary();
        assert!(summary.starts_with("Settings:"));
        assert!(summary.contains("Size (px): 256"));
        assert!(summary.contains("Error correction: H"));

        let config = Config { language: Language::Jp, theme: Theme::Dark, ..config };
        let summary = config.summary();
        assert!(summary.starts_with("設定:"));
        assert!(summary.contains("テーマ: dark"));
        assert!(summary.contains("誤り訂正レベル: H"));
        assert!(!summary.contains("Settings"));
    }

    #[test]
    fn test_generate_options_from_config() {
        let config = Config { default_size: 128, default_ec_level: EcLevel::Q, ..Default::default() };
        let opts = config.generate_options();
        assert_eq!(opts.size, 128);
        assert_eq!(opts.ec_level, EcLevel::Q);
        assert_eq!(opts.dark, GenerateOptions::default().dark);
    }
}
