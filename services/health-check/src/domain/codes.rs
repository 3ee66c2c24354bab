// ヘルスチェックLambdaのコードとエラー情報

use lambda_common::domain::{LambdaCode, ResponseInfo, ServiceCode, http_status};

/// ヘルスチェックLambdaのLambdaコード
pub const HEALTH_CHECK_LAMBDA_CODE: LambdaCode = LambdaCode::from_static("001");

/// HealthCheckServiceのサービスコード
pub const HEALTH_CHECK_SERVICE_CODE: ServiceCode = ServiceCode::from_static("1");

/// 入力された日時を日付として解釈できない
pub const DATE_NOT_FOUND: ResponseInfo =
    ResponseInfo::new(http_status::NOT_FOUND, "001", "Input Date Not Found");
