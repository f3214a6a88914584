//! Data URL の組み立てと解析
//!
//! "data:image/png;base64,iVBORw0..." 形式のみ扱う。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::{Error, Result};

/// 解析済み Data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl DataUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidDataUrl("missing `data:` prefix".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidDataUrl("missing `,` separator".into()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::InvalidDataUrl("only base64 payloads are supported".into()))?;
        let mime_type = if mime_type.is_empty() {
            "text/plain"
        } else {
            mime_type
        };

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::InvalidDataUrl(e.to_string()))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data,
        })
    }
}

/// バイト列から Data URL を作成
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
