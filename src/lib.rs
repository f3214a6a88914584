//! QR Studio CLI
//!
//! 共通ライブラリ（qr-studio-common）を使ったコマンドライン版

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod reader;
pub mod scanner;
pub mod session;
