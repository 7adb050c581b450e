use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 簡易なロガー設定（RUST_LOG 環境変数で制御可能）
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
