//! QRコードの生成と読み取り
//!
//! 生成は `qrcode`、読み取りは `rqrr` の薄いラッパー。
//! どちらもピュアRustなのでCLIとWASMの両方で使える。

mod encode;
mod decode;

pub use encode::{encode_data_url, encode_png, encode_svg, render_image};
pub use decode::{decode_bytes, decode_data_url, decode_image, decode_rgba};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 誤り訂正レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcLevel {
    /// 約7%復元
    L,
    /// 約15%復元（デフォルト）
    #[default]
    M,
    /// 約25%復元
    Q,
    /// 約30%復元
    H,
}

impl EcLevel {
    pub const ALL: [EcLevel; 4] = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H];

    pub fn as_str(&self) -> &'static str {
        match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        }
    }

    /// フォーマット情報の2ビット（L=01, M=00, Q=11, H=10）
    fn from_format_bits(bits: u16) -> Self {
        match bits & 0b11 {
            1 => EcLevel::L,
            0 => EcLevel::M,
            3 => EcLevel::Q,
            _ => EcLevel::H,
        }
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl std::str::FromStr for EcLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l" | "low" => Ok(EcLevel::L),
            "m" | "medium" => Ok(EcLevel::M),
            "q" | "quartile" => Ok(EcLevel::Q),
            "h" | "high" => Ok(EcLevel::H),
            _ => Err(format!("Unknown error correction level: {}. Use l, m, q, or h", s)),
        }
    }
}

impl std::fmt::Display for EcLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RGBカラー（"#rrggbb" / "rrggbb" / "#rgb"）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };
    pub const WHITE: HexColor = HexColor { r: 255, g: 255, b: 255 };

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl std::str::FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(s.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize, len: usize| -> Result<u8> {
            let v = u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| invalid())?;
            Ok(if len == 1 { v * 17 } else { v })
        };

        match hex.len() {
            6 => Ok(HexColor { r: channel(0, 2)?, g: channel(2, 2)?, b: channel(4, 2)? }),
            3 => Ok(HexColor { r: channel(0, 1)?, g: channel(1, 1)?, b: channel(2, 1)? }),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 生成オプション
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// 出力画像の目安サイズ（px）
    pub size: u32,
    /// 余白（モジュール数）
    pub margin: u32,
    pub ec_level: EcLevel,
    pub dark: HexColor,
    pub light: HexColor,
}

impl GenerateOptions {
    pub const MAX_SIZE: u32 = 4096;
    pub const MAX_MARGIN: u32 = 32;

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > Self::MAX_SIZE {
            return Err(Error::InvalidOption(format!(
                "size must be between 1 and {} (got {})",
                Self::MAX_SIZE,
                self.size
            )));
        }
        if self.margin > Self::MAX_MARGIN {
            return Err(Error::InvalidOption(format!(
                "margin must be at most {} (got {})",
                Self::MAX_MARGIN,
                self.margin
            )));
        }
        Ok(())
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            size: 256,
            margin: 4,
            ec_level: EcLevel::M,
            dark: HexColor::BLACK,
            light: HexColor::WHITE,
        }
    }
}

/// 読み取り結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoded {
    pub content: String,
    pub version: usize,
    pub ec_level: EcLevel,
    /// 検出した四隅（画像座標）
    pub bounds: [(i32, i32); 4],
}
