//! ログ初期化
//!
//! ログはstderr、結果表示はstdout。`--verbose` で debug、それ以外は
//! `RUST_LOG` があればそれを、なければ warn を使う。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("qr_studio=debug,qr_studio_common=debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init_logging(verbose: bool) {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(layer)
        .try_init();
}
