//! QR Studio Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod i18n;
pub mod shell;
pub mod data_url;
pub mod qr;
pub mod error;

pub use types::{Language, Tab, Theme};
pub use i18n::{translate, TextKey};
pub use shell::{Notification, ShellState, VERIFY_NOTICE_DELAY_MS};
pub use data_url::{to_data_url, DataUrl};
pub use qr::{
    decode_bytes, decode_data_url, decode_image, decode_rgba,
    encode_data_url, encode_png, encode_svg, render_image,
    Decoded, EcLevel, GenerateOptions, HexColor,
};
pub use error::{Error, Result};
