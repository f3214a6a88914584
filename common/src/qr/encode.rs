//! QRコード生成

use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::bits::Bits;
use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{Color, QrCode, Version};
use std::io::Cursor;

use super::GenerateOptions;
use crate::data_url::to_data_url;
use crate::error::{Error, Result};

/// 8bitバイトモード固定で最小バージョンのシンボルを組み立てる
///
/// 自動最適化だとUTF-8の日本語が漢字モードと誤判定されるため使わない。
fn build_code(text: &str, opts: &GenerateOptions) -> Result<QrCode> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    opts.validate()?;

    let ec_level: qrcode::EcLevel = opts.ec_level.into();
    for version in 1..=40 {
        let mut bits = Bits::new(Version::Normal(version));
        if bits.push_byte_data(text.as_bytes()).is_err() || bits.push_terminator(ec_level).is_err() {
            continue;
        }
        return Ok(QrCode::with_bits(bits, ec_level)?);
    }
    Err(QrError::DataTooLong.into())
}

/// QRコードをRGBA画像に描画
///
/// 1モジュールあたり `max(1, size / (幅 + 余白*2))` px で拡大する。
pub fn render_image(text: &str, opts: &GenerateOptions) -> Result<RgbaImage> {
    let code = build_code(text, opts)?;
    let modules = code.to_colors();
    let width = code.width() as u32;

    let total = width + opts.margin * 2;
    let scale = (opts.size / total).max(1);
    let img_size = total * scale;

    let dark = Rgba(opts.dark.to_rgba());
    let mut img = RgbaImage::from_pixel(img_size, img_size, Rgba(opts.light.to_rgba()));

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32 % width + opts.margin) * scale;
        let y = (i as u32 / width + opts.margin) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x + dx, y + dy, dark);
            }
        }
    }

    Ok(img)
}

/// PNGバイト列を生成
pub fn encode_png(text: &str, opts: &GenerateOptions) -> Result<Vec<u8>> {
    let img = render_image(text, opts)?;
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)?;
    Ok(png_bytes)
}

/// SVG文字列を生成
///
/// SVGの余白は `qrcode` 標準のクワイエットゾーン（4モジュール）で、
/// `margin` が0の場合のみ余白なしになる。
pub fn encode_svg(text: &str, opts: &GenerateOptions) -> Result<String> {
    let code = build_code(text, opts)?;
    let dark = opts.dark.to_hex();
    let light = opts.light.to_hex();

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(opts.size, opts.size)
        .quiet_zone(opts.margin > 0)
        .dark_color(svg::Color(dark.as_str()))
        .light_color(svg::Color(light.as_str()))
        .build())
}

/// PNGのData URLを生成（画面表示・検証用）
pub fn encode_data_url(text: &str, opts: &GenerateOptions) -> Result<String> {
    let png = encode_png(text, opts)?;
    Ok(to_data_url("image/png", &png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{EcLevel, HexColor};

    #[test]
    fn test_render_image_is_square() {
        let img = render_image("https://example.com", &GenerateOptions::default()).unwrap();
        assert!(img.width() > 0);
        assert_eq!(img.width(), img.height());
        assert!(img.width() <= 256);
    }

    #[test]
    fn test_render_image_colors() {
        let opts = GenerateOptions {
            dark: "#1e40af".parse().unwrap(),
            light: HexColor::WHITE,
            ..Default::default()
        };
        let img = render_image("hello", &opts).unwrap();

        // 余白は背景色、左上のファインダーパターンは前景色
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        let scale = img.width() / (21 + 8);
        let corner = img.get_pixel(4 * scale, 4 * scale).0;
        assert_eq!(corner, [0x1e, 0x40, 0xaf, 255]);
    }

    #[test]
    fn test_render_small_size_uses_one_pixel_modules() {
        let opts = GenerateOptions { size: 1, margin: 0, ..Default::default() };
        let img = render_image("hello", &opts).unwrap();
        // バージョン1 = 21x21
        assert_eq!(img.width(), 21);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = encode_png("", &GenerateOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_data_too_long() {
        let text = "x".repeat(5000);
        let opts = GenerateOptions { ec_level: EcLevel::H, ..Default::default() };
        assert!(matches!(encode_png(&text, &opts), Err(Error::Encode(_))));
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png("hello", &GenerateOptions::default()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_encode_svg_uses_colors() {
        let opts = GenerateOptions {
            dark: "#112233".parse().unwrap(),
            light: "#fafafa".parse().unwrap(),
            ..Default::default()
        };
        let svg = encode_svg("hello", &opts).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#112233"));
        assert!(svg.contains("#fafafa"));
    }

    #[test]
    fn test_encode_data_url_prefix() {
        let url = encode_data_url("hello", &GenerateOptions::default()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
