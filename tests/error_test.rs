//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use qr_studio::error::QrStudioError;
use qr_studio::{reader, scanner};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(matches!(result, Err(QrStudioError::FileNotFound(_))));
}

/// 画像のないフォルダは空のVecを返す
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path(), false).unwrap();
    assert!(result.is_empty());
}

/// 壊れた画像ファイルは共通エラーとして返る
#[test]
fn test_read_corrupt_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG garbage").unwrap();

    let err = reader::read_file(&path).unwrap_err();
    assert!(matches!(
        err,
        QrStudioError::Common(qr_studio_common::Error::ImageLoad(_))
    ));
}

/// 存在しないファイルはIOエラー
#[test]
fn test_read_missing_file() {
    let err = reader::read_file(Path::new("/nonexistent/qr.png")).unwrap_err();
    assert!(matches!(err, QrStudioError::Io(_)));
}

/// QrStudioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        QrStudioError::Config("テスト設定エラー".to_string()),
        QrStudioError::FileNotFound("qr.png".to_string()),
        QrStudioError::NoImagesFound("フォルダ".to_string()),
        QrStudioError::VerificationFailed {
            expected: "hello".to_string(),
            actual: None,
        },
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 検証失敗メッセージに期待値と実際の値が入る
#[test]
fn test_verification_failed_message() {
    let err = QrStudioError::VerificationFailed {
        expected: "hello".to_string(),
        actual: Some("hallo".to_string()),
    };
    let display = format!("{}", err);
    assert!(display.contains("hello"));
    assert!(display.contains("hallo"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: QrStudioError = json_err.into();
    assert!(matches!(err, QrStudioError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: QrStudioError = qr_studio_common::Error::InvalidColor("#zz".to_string()).into();
    assert!(matches!(err, QrStudioError::Common(_)));
    assert_eq!(format!("{}", err), "Invalid color: #zz");
}
