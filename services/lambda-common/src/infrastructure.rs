// インフラストラクチャ層モジュール
pub mod config;
pub mod logger;
pub mod logging;

// 再エクスポート
pub use config::LambdaEnvConfig;
pub use logger::{Logger, TracingLogger};
pub use logging::init_logging;
