//! 画像ファイルからの一括読み取り

use crate::error::Result;
use crate::scanner::ImageInfo;
use image::ImageReader;
use indicatif::{ProgressBar, ProgressStyle};
use qr_studio_common::{decode_image, Decoded};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// 1ファイル分の読み取り結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResult {
    pub file_name: String,
    pub file_path: String,
    pub codes: Vec<Decoded>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 画像ファイルを開いてQRコードを読み取る（形式は内容から判定）
pub fn read_file(path: &Path) -> Result<Vec<Decoded>> {
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(qr_studio_common::Error::from)?;
    Ok(decode_image(&img))
}

/// 画像リストを並列に読み取る
///
/// 個々のファイルの失敗は `ReadResult::error` に記録し、全体は止めない。
pub fn read_images(images: &[ImageInfo], show_progress: bool) -> Vec<ReadResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(images.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=> "));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<ReadResult> = images
        .par_iter()
        .map(|info| {
            let outcome = read_file(&info.path);
            pb.inc(1);
            match outcome {
                Ok(codes) => {
                    tracing::debug!(file = %info.file_name, count = codes.len(), "decoded");
                    ReadResult {
                        file_name: info.file_name.clone(),
                        file_path: info.path.display().to_string(),
                        codes,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::warn!(file = %info.file_name, error = %e, "failed to read image");
                    ReadResult {
                        file_name: info.file_name.clone(),
                        file_path: info.path.display().to_string(),
                        codes: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    pb.finish_and_clear();
    results
}
