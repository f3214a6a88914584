//! 対話モード
//!
//! Web版と同じシェル状態（タブ・言語・テーマ・検証画像・リセット）を
//! ターミナルのメニューで操作する。

use crate::config::Config;
use crate::error::Result;
use crate::reader;
use dialoguer::{Confirm, Input, Select};
use qr_studio_common::{
    decode_data_url, encode_data_url, GenerateOptions, ShellState, Tab, TextKey, Theme,
};
use std::path::PathBuf;
use std::time::Duration;

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SwitchTab(Tab),
    GenerateAndVerify,
    ReadFile,
    ToggleLanguage,
    ToggleTheme,
    Reset,
    Quit,
}

impl MenuAction {
    pub fn label(&self, shell: &ShellState) -> String {
        match self {
            MenuAction::SwitchTab(Tab::Read) => format!("→ {}", shell.t(TextKey::TabRead)),
            MenuAction::SwitchTab(Tab::Generate) => format!("→ {}", shell.t(TextKey::TabGen)),
            MenuAction::GenerateAndVerify => {
                format!("{} + {}", shell.t(TextKey::Generate), shell.t(TextKey::Verify))
            }
            MenuAction::ReadFile => shell.t(TextKey::ReadFile).to_string(),
            MenuAction::ToggleLanguage => {
                format!("{} ({})", shell.t(TextKey::ToggleLanguage), shell.lang().label())
            }
            MenuAction::ToggleTheme => {
                format!("{} ({})", shell.t(TextKey::ToggleTheme), shell.theme())
            }
            MenuAction::Reset => shell.t(TextKey::Reset).to_string(),
            MenuAction::Quit => shell.t(TextKey::Quit).to_string(),
        }
    }
}

/// アクティブタブに応じたメニュー
pub fn menu_items(shell: &ShellState) -> Vec<MenuAction> {
    let mut items = Vec::new();
    match shell.active_tab() {
        Tab::Read => {
            items.push(MenuAction::ReadFile);
            items.push(MenuAction::SwitchTab(Tab::Generate));
        }
        Tab::Generate => {
            items.push(MenuAction::GenerateAndVerify);
            items.push(MenuAction::SwitchTab(Tab::Read));
        }
    }
    items.extend([
        MenuAction::ToggleLanguage,
        MenuAction::ToggleTheme,
        MenuAction::Reset,
        MenuAction::Quit,
    ]);
    items
}

/// ヘッダーとタブバーの1行表示
pub fn render_header(shell: &ShellState) -> String {
    let tab = |t: Tab, key: TextKey| {
        if shell.is_visible(t) {
            format!("[{}]", shell.t(key))
        } else {
            format!(" {} ", shell.t(key))
        }
    };
    let theme_icon = match shell.theme() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };
    format!(
        "▣ {}  {} {}  |  {} {}",
        shell.t(TextKey::AppTitle),
        shell.lang().label(),
        theme_icon,
        tab(Tab::Read, TextKey::TabRead),
        tab(Tab::Generate, TextKey::TabGen),
    )
}

/// 検証画像を読み取って結果を表示（読み取りパネルの初期画像に相当）
fn show_verification(shell: &ShellState) {
    let Some(image) = shell.verification_image() else {
        return;
    };
    println!("{}...", shell.t(TextKey::VerifyingImage));
    match decode_data_url(image) {
        Ok(codes) if !codes.is_empty() => {
            for code in codes {
                println!("  {}: {}", shell.t(TextKey::DecodedResult), code.content);
            }
        }
        Ok(_) => println!("  {}", shell.t(TextKey::NoQrFound)),
        Err(e) => println!("  {}: {}", shell.t(TextKey::ImageLoadFailed), e),
    }
}

/// 対話ループ
pub fn run_interactive(config: &Config) -> Result<()> {
    let mut shell = ShellState::with_preferences(config.language, config.theme);
    let opts: GenerateOptions = config.generate_options();

    loop {
        println!("\n{}", render_header(&shell));

        let items = menu_items(&shell);
        let labels: Vec<String> = items.iter().map(|a| a.label(&shell)).collect();
        let choice = Select::new().items(&labels).default(0).interact()?;

        match items[choice] {
            MenuAction::SwitchTab(tab) => shell.set_tab(tab),
            MenuAction::ToggleLanguage => shell.toggle_lang(),
            MenuAction::ToggleTheme => shell.toggle_theme(),
            MenuAction::GenerateAndVerify => {
                let text: String = Input::new()
                    .with_prompt(shell.t(TextKey::InputLabel))
                    .interact_text()?;
                if text.is_empty() {
                    println!("{}", shell.t(TextKey::EmptyInput));
                    continue;
                }
                match encode_data_url(&text, &opts) {
                    Ok(url) => {
                        let notice = shell.request_verification(url);
                        std::thread::sleep(Duration::from_millis(notice.delay_ms.into()));
                        println!("✔ {}", notice.message);
                        show_verification(&shell);
                    }
                    Err(e) => println!("{}: {}", shell.t(TextKey::GenerateFailed), e),
                }
            }
            MenuAction::ReadFile => {
                let path: String = Input::new()
                    .with_prompt(shell.t(TextKey::ImagePath))
                    .interact_text()?;
                match reader::read_file(&PathBuf::from(path.trim())) {
                    Ok(codes) if codes.is_empty() => println!("{}", shell.t(TextKey::NoQrFound)),
                    Ok(codes) => {
                        for code in codes {
                            println!("  {}: {}", shell.t(TextKey::DecodedResult), code.content);
                        }
                    }
                    Err(e) => println!("{}: {}", shell.t(TextKey::ImageLoadFailed), e),
                }
            }
            MenuAction::Reset => {
                let mut prompt_error = None;
                let done = shell.reset_with(|msg| {
                    match Confirm::new().with_prompt(msg).default(false).interact() {
                        Ok(answer) => answer,
                        Err(e) => {
                            prompt_error = Some(e);
                            false
                        }
                    }
                });
                if let Some(e) = prompt_error {
                    return Err(e.into());
                }
                tracing::debug!(done, reset_key = shell.reset_key(), "reset requested");
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
