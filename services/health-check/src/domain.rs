// ドメイン層モジュール
pub mod codes;
pub mod dto;

// 再エクスポート
pub use codes::{DATE_NOT_FOUND, HEALTH_CHECK_LAMBDA_CODE, HEALTH_CHECK_SERVICE_CODE};
pub use dto::{HealthCheckRequest, HealthCheckResponse};
