// Lambda実行環境の設定
//
// インフラスタックが全関数に注入する環境変数を読み込み、
// 型付きで提供するインフラストラクチャ層コンポーネント。

/// 環境変数名: デプロイステージ
pub const ENV_STAGE: &str = "STAGE";

/// 環境変数名: AWSリージョン
pub const ENV_REGION: &str = "REGION";

/// 環境変数名: デフォルトのログレベル
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// ステージ未設定時のデフォルト値
pub const DEFAULT_STAGE: &str = "dev";

/// Lambda実行環境の設定
///
/// 未設定または空文字の環境変数はデフォルト値で補う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaEnvConfig {
    /// デプロイステージ (STAGE環境変数、デフォルト: dev)
    stage: String,
    /// AWSリージョン (REGION環境変数)
    region: Option<String>,
    /// RUST_LOG未設定時のログレベル (LOG_LEVEL環境変数、デフォルト: devならdebug、それ以外はinfo)
    log_level: String,
}

impl LambdaEnvConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        // 空文字はNone扱い
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let stage = get_optional_string(ENV_STAGE).unwrap_or_else(|| DEFAULT_STAGE.to_string());
        let region = get_optional_string(ENV_REGION);
        let log_level =
            get_optional_string(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level(&stage).to_string());

        Self {
            stage,
            region,
            log_level,
        }
    }

    /// テスト用に明示的な値で作成
    pub fn new(stage: impl Into<String>, region: Option<String>, log_level: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            region,
            log_level: log_level.into(),
        }
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_prod(&self) -> bool {
        self.stage == "prod"
    }

    pub fn is_dev(&self) -> bool {
        self.stage == "dev"
    }
}

fn default_log_level(stage: &str) -> &'static str {
    if stage == "dev" { "debug" } else { "info" }
}
