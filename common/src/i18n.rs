//! 翻訳テーブル
//!
//! キーごとに英語・日本語の文字列を保持する静的テーブル。
//! `translate(lang, key)` で現在の言語の文字列を引く。

use crate::types::Language;

/// 翻訳キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // シェル
    AppTitle,
    Reset,
    ResetConfirm,
    ToggleLanguage,
    ToggleTheme,
    TabRead,
    TabGen,
    VerificationSuccess,

    // 読み取りパネル
    UploadPrompt,
    UploadHint,
    StartCamera,
    StopCamera,
    CameraUnavailable,
    Scanning,
    DecodedResult,
    NoQrFound,
    Copy,
    Copied,
    ImageLoadFailed,
    VerifyingImage,

    // 生成パネル
    InputLabel,
    InputPlaceholder,
    ErrorCorrection,
    Size,
    Margin,
    DarkColor,
    LightColor,
    Generate,
    DownloadPng,
    DownloadSvg,
    Verify,
    EmptyInput,
    GenerateFailed,

    // 検証結果・対話モード（CLI）
    VerifyMatch,
    VerifyMismatch,
    ReadFile,
    ImagePath,
    Quit,

    // 設定（CLI）
    Settings,
    SettingsSaved,
    LanguageLabel,
    ThemeLabel,
}

impl TextKey {
    pub const ALL: &'static [TextKey] = &[
        TextKey::AppTitle,
        TextKey::Reset,
        TextKey::ResetConfirm,
        TextKey::ToggleLanguage,
        TextKey::ToggleTheme,
        TextKey::TabRead,
        TextKey::TabGen,
        TextKey::VerificationSuccess,
        TextKey::UploadPrompt,
        TextKey::UploadHint,
        TextKey::StartCamera,
        TextKey::StopCamera,
        TextKey::CameraUnavailable,
        TextKey::Scanning,
        TextKey::DecodedResult,
        TextKey::NoQrFound,
        TextKey::Copy,
        TextKey::Copied,
        TextKey::ImageLoadFailed,
        TextKey::VerifyingImage,
        TextKey::InputLabel,
        TextKey::InputPlaceholder,
        TextKey::ErrorCorrection,
        TextKey::Size,
        TextKey::Margin,
        TextKey::DarkColor,
        TextKey::LightColor,
        TextKey::Generate,
        TextKey::DownloadPng,
        TextKey::DownloadSvg,
        TextKey::Verify,
        TextKey::EmptyInput,
        TextKey::GenerateFailed,
        TextKey::VerifyMatch,
        TextKey::VerifyMismatch,
        TextKey::ReadFile,
        TextKey::ImagePath,
        TextKey::Quit,
        TextKey::Settings,
        TextKey::SettingsSaved,
        TextKey::LanguageLabel,
        TextKey::ThemeLabel,
    ];

    /// (英語, 日本語)
    const fn entry(self) -> (&'static str, &'static str) {
        match self {
            TextKey::AppTitle => ("QR Studio", "QRスタジオ"),
            TextKey::Reset => ("Reset", "リセット"),
            TextKey::ResetConfirm => ("Reset all data?", "すべてのデータをリセットしますか？"),
            TextKey::ToggleLanguage => ("Toggle Language", "言語切替"),
            TextKey::ToggleTheme => ("Toggle Theme", "テーマ切替"),
            TextKey::TabRead => ("Scan QR", "QR読み取り"),
            TextKey::TabGen => ("Generate QR", "QR作成"),
            TextKey::VerificationSuccess => (
                "The generated QR code was sent to the reader for verification.",
                "作成したQRコードを読み取りタブに送りました。内容を確認してください。",
            ),
            TextKey::UploadPrompt => (
                "Drop an image here or click to select",
                "画像をドラッグ&ドロップ または クリックして選択",
            ),
            TextKey::UploadHint => ("Supported: PNG, JPEG, GIF, BMP, WebP", "対応形式: PNG, JPEG, GIF, BMP, WebP"),
            TextKey::StartCamera => ("Start camera", "カメラを起動"),
            TextKey::StopCamera => ("Stop camera", "カメラを停止"),
            TextKey::CameraUnavailable => ("Camera is not available", "カメラを利用できません"),
            TextKey::Scanning => ("Scanning...", "読み取り中..."),
            TextKey::DecodedResult => ("Decoded content", "読み取り結果"),
            TextKey::NoQrFound => ("No QR code found in the image", "画像からQRコードが見つかりません"),
            TextKey::Copy => ("Copy", "コピー"),
            TextKey::Copied => ("Copied!", "コピーしました"),
            TextKey::ImageLoadFailed => ("Could not load the image", "画像を読み込めませんでした"),
            TextKey::VerifyingImage => ("Verifying generated code", "作成したコードを検証中"),
            TextKey::InputLabel => ("Text or URL", "テキストまたはURL"),
            TextKey::InputPlaceholder => ("https://example.com", "https://example.com"),
            TextKey::ErrorCorrection => ("Error correction", "誤り訂正レベル"),
            TextKey::Size => ("Size (px)", "サイズ (px)"),
            TextKey::Margin => ("Margin (modules)", "余白 (モジュール)"),
            TextKey::DarkColor => ("Foreground", "前景色"),
            TextKey::LightColor => ("Background", "背景色"),
            TextKey::Generate => ("Generate", "作成"),
            TextKey::DownloadPng => ("Download PNG", "PNGを保存"),
            TextKey::DownloadSvg => ("Download SVG", "SVGを保存"),
            TextKey::Verify => ("Verify in reader", "読み取りで検証"),
            TextKey::EmptyInput => ("Please enter some text", "テキストを入力してください"),
            TextKey::GenerateFailed => ("Could not generate the QR code", "QRコードを作成できませんでした"),
            TextKey::VerifyMatch => ("Verification succeeded", "検証成功"),
            TextKey::VerifyMismatch => ("Verification failed", "検証失敗"),
            TextKey::ReadFile => ("Read an image file", "画像ファイルを読み取る"),
            TextKey::ImagePath => ("Image path", "画像のパス"),
            TextKey::Quit => ("Quit", "終了"),
            TextKey::Settings => ("Settings", "設定"),
            TextKey::SettingsSaved => ("Settings saved", "設定を保存しました"),
            TextKey::LanguageLabel => ("Language", "言語"),
            TextKey::ThemeLabel => ("Theme", "テーマ"),
        }
    }
}

/// 指定言語の文字列を返す
pub fn translate(lang: Language, key: TextKey) -> &'static str {
    let (en, jp) = key.entry();
    match lang {
        Language::En => en,
        Language::Jp => jp,
    }
}
