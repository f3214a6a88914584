//! QRコード読み取り

use image::{DynamicImage, GrayImage, RgbaImage};

use super::{Decoded, EcLevel};
use crate::data_url::DataUrl;
use crate::error::{Error, Result};

/// グレースケール画像から全QRコードを読み取る
///
/// 検出できてもデコードに失敗したシンボルは結果に含めない。
fn decode_luma(gray: &GrayImage) -> Vec<Decoded> {
    let (width, height) = gray.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| gray.get_pixel(x as u32, y as u32).0[0],
    );

    prepared
        .detect_grids()
        .into_iter()
        .filter_map(|grid| {
            let bounds = [0, 1, 2, 3].map(|i| (grid.bounds[i].x, grid.bounds[i].y));
            let (meta, content) = grid.decode().ok()?;
            Some(Decoded {
                content,
                version: meta.version.0,
                ec_level: EcLevel::from_format_bits(meta.ecc_level),
                bounds,
            })
        })
        .collect()
}

pub fn decode_image(img: &DynamicImage) -> Vec<Decoded> {
    decode_luma(&img.to_luma8())
}

/// 画像ファイルのバイト列（PNG/JPEG等）から読み取る
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<Decoded>> {
    let img = image::load_from_memory(bytes)?;
    Ok(decode_image(&img))
}

/// カメラフレーム等のRGBA生データから読み取る
pub fn decode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<Decoded>> {
    let img = RgbaImage::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
        Error::ImageLoad(format!(
            "RGBA buffer of {} bytes does not match {}x{}",
            rgba.len(),
            width,
            height
        ))
    })?;
    Ok(decode_image(&DynamicImage::ImageRgba8(img)))
}

/// 画像のData URLから読み取る
pub fn decode_data_url(url: &str) -> Result<Vec<Decoded>> {
    let parsed = DataUrl::parse(url)?;
    decode_bytes(&parsed.data)
}
