/// ヘルスチェックHTTPハンドラー
///
/// リクエストをサービスへ渡し、結果をレスポンスエンベロープに変換する。
/// 失敗時はLambdaコードを設定してからエラーレスポンスを返すため、
/// 呼び出し元へエラーが伝播することはない。
use std::sync::Arc;

use lambda_common::{CustomException, Logger, ResponseHandler};
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::json;

use crate::application::HealthCheckService;
use crate::domain::{HEALTH_CHECK_LAMBDA_CODE, HealthCheckResponse};

/// ログ相関用のコンテキスト名
pub const HANDLER_CONTEXT: &str = "HealthCheckLambda";

pub const SUCCESS_MESSAGE: &str = "Health check completed successfully";
pub const FAILURE_MESSAGE: &str = "Health check failed";

/// Lambdaコンテキストが取得できない場合のリクエストID
const UNKNOWN_REQUEST_ID: &str = "unknown";

pub struct HealthCheckHandler {
    service: HealthCheckService,
    logger: Arc<dyn Logger>,
}

impl HealthCheckHandler {
    pub fn new(service: HealthCheckService, logger: Arc<dyn Logger>) -> Self {
        Self { service, logger }
    }

    /// HTTPリクエストを処理してレスポンスを返す
    pub fn handle(&self, request: &Request) -> Response<Body> {
        let request_id = request
            .lambda_context_ref()
            .map(|context| context.request_id.as_str())
            .unwrap_or(UNKNOWN_REQUEST_ID);

        self.logger.info(
            HANDLER_CONTEXT,
            "Health check request received",
            Some(&json!({
                "requestId": request_id,
                "httpMethod": request.method().as_str(),
                "path": request.uri().path(),
            })),
        );

        match self.process(request.body()) {
            Ok(result) => {
                let response = ResponseHandler::success(&result, SUCCESS_MESSAGE);
                self.logger.info(
                    HANDLER_CONTEXT,
                    "Health check completed",
                    Some(&json!({
                        "requestId": request_id,
                        "isHealthy": result.is_healthy,
                    })),
                );
                response
            }
            Err(mut exception) => {
                exception.set_lambda_code(HEALTH_CHECK_LAMBDA_CODE);
                self.logger.error(HANDLER_CONTEXT, FAILURE_MESSAGE, &exception);
                ResponseHandler::error(&exception, FAILURE_MESSAGE)
            }
        }
    }

    fn process(&self, body: &[u8]) -> Result<HealthCheckResponse, CustomException> {
        let request = self.service.parse_request(body)?;
        self.service.health_check(&request)
    }
}
