use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dynamodb_table: Option<String>,
    pub environment: String,
}

impl Config {
    /// 環境変数から設定を読み込む。
    /// DYNAMODB_TABLE が未設定の場合は InMemory ストアで起動する。
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            dynamodb_table: env::var("DYNAMODB_TABLE").ok(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()),
        }
    }
}
