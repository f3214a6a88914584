use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrStudioError {
    #[error(transparent)]
    Common(#[from] qr_studio_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("検証に失敗しました: 期待値 {expected:?}, 読み取り結果 {actual:?}")]
    VerificationFailed {
        expected: String,
        actual: Option<String>,
    },

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrStudioError>;
