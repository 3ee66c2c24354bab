// アプリケーション層モジュール
pub mod health_check_handler;
pub mod health_check_service;

// 再エクスポート
pub use health_check_handler::HealthCheckHandler;
pub use health_check_service::HealthCheckService;
