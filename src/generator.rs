//! QRコードの作成・保存・検証

use crate::cli::{OutputFormat, StyleArgs};
use crate::config::Config;
use crate::error::{QrStudioError, Result};
use qr_studio_common::{decode_bytes, encode_png, encode_svg, GenerateOptions, HexColor};
use std::path::{Path, PathBuf};

/// コマンドライン指定と設定値から生成オプションを組み立てる
pub fn build_options(style: &StyleArgs, config: &Config) -> Result<GenerateOptions> {
    let base = config.generate_options();
    let opts = GenerateOptions {
        size: style.size.unwrap_or(base.size),
        margin: style.margin.unwrap_or(base.margin),
        ec_level: style.ec.unwrap_or(base.ec_level),
        dark: style.dark.parse::<HexColor>()?,
        light: style.light.parse::<HexColor>()?,
    };
    opts.validate()?;
    Ok(opts)
}

/// 出力先（省略時はカレントの qrcode.<ext>）
pub fn output_path(output: Option<PathBuf>, format: OutputFormat) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(format!("qrcode.{}", format.extension())))
}

/// QRコードをファイルに書き出す
pub fn write_code(text: &str, opts: &GenerateOptions, format: OutputFormat, path: &Path) -> Result<()> {
    match format {
        OutputFormat::Png => std::fs::write(path, encode_png(text, opts)?)?,
        OutputFormat::Svg => std::fs::write(path, encode_svg(text, opts)?)?,
    }
    tracing::debug!(path = %path.display(), ?format, "wrote QR code");
    Ok(())
}

/// 作成したPNGを読み取り、元のテキストと一致するか確認
///
/// 一致すれば読み取れた内容を返す。
pub fn verify_roundtrip(text: &str, opts: &GenerateOptions) -> Result<String> {
    let png = encode_png(text, opts)?;
    let decoded = decode_bytes(&png)?;
    let actual = decoded.into_iter().next().map(|d| d.content);

    match actual {
        Some(content) if content == text => Ok(content),
        actual => Err(QrStudioError::VerificationFailed {
            expected: text.to_string(),
            actual,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_studio_common::EcLevel;

    #[test]
    fn test_build_options_uses_config_defaults() {
        let config = Config { default_size: 300, default_ec_level: EcLevel::Q, ..Default::default() };
        let style = StyleArgs {
            dark: "#000000".into(),
            light: "#ffffff".into(),
            ..Default::default()
        };
        let opts = build_options(&style, &config).unwrap();
        assert_eq!(opts.size, 300);
        assert_eq!(opts.ec_level, EcLevel::Q);
    }

    #[test]
    fn test_build_options_flags_override_config() {
        let style = StyleArgs {
            size: Some(128),
            ec: Some(EcLevel::L),
            dark: "#ff0000".into(),
            light: "#fff".into(),
            ..Default::default()
        };
        let opts = build_options(&style, &Config::default()).unwrap();
        assert_eq!(opts.size, 128);
        assert_eq!(opts.ec_level, EcLevel::L);
        assert_eq!(opts.dark.to_hex(), "#ff0000");
        assert_eq!(opts.light, HexColor::WHITE);
    }

    #[test]
    fn test_build_options_rejects_bad_color() {
        let style = StyleArgs {
            dark: "red".into(),
            light: "#ffffff".into(),
            ..Default::default()
        };
        let result = build_options(&style, &Config::default());
        assert!(matches!(
            result,
            Err(QrStudioError::Common(qr_studio_common::Error::InvalidColor(_)))
        ));
    }

    #[test]
    fn test_output_path_default() {
        assert_eq!(output_path(None, OutputFormat::Svg), PathBuf::from("qrcode.svg"));
        assert_eq!(
            output_path(Some(PathBuf::from("out.png")), OutputFormat::Png),
            PathBuf::from("out.png")
        );
    }

    #[test]
    fn test_verify_roundtrip_ok() {
        let content = verify_roundtrip("roundtrip", &GenerateOptions::default()).unwrap();
        assert_eq!(content, "roundtrip");
    }

    #[test]
    fn test_verify_roundtrip_low_contrast_fails() {
        // 前景と背景が同色だと読み取れない
        let opts = GenerateOptions {
            dark: HexColor::WHITE,
            light: HexColor::WHITE,
            ..Default::default()
        };
        let result = verify_roundtrip("invisible", &opts);
        assert!(matches!(result, Err(QrStudioError::VerificationFailed { actual: None, .. })));
    }
}
