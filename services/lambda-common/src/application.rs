// アプリケーション層モジュール
pub mod base_external_service;
pub mod base_service;
pub mod database_service;
pub mod response_handler;

// 再エクスポート
pub use base_external_service::{BaseExternalService, ExternalServiceBase, classify_external};
pub use base_service::{BaseService, ServiceBase, classify_service};
pub use database_service::DatabaseService;
pub use response_handler::ResponseHandler;
