/// ヘルスチェックHTTP Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエストを処理し、
/// 処理時刻とリクエストのタイムスタンプを返却する。
use std::sync::Arc;

use health_check::application::{HealthCheckHandler, HealthCheckService};
use lambda_common::Logger;
use lambda_common::infrastructure::{LambdaEnvConfig, TracingLogger, init_logging};
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaEnvConfig::from_env();

    // 構造化ログを初期化
    init_logging(config.log_level());

    info!(
        stage = config.stage(),
        region = config.region().unwrap_or_default(),
        "ヘルスチェックLambda関数を初期化"
    );

    // ロガーとハンドラーはコールドスタート時に1度だけ作成し、以降のリクエストで再利用する
    let handler = create_handler();
    let handler = &handler;

    run(service_fn(move |request: Request| async move {
        handle(handler, request).await
    }))
    .await
}

fn create_handler() -> HealthCheckHandler {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
    HealthCheckHandler::new(HealthCheckService::new(Arc::clone(&logger)), logger)
}

/// HTTPリクエストハンドラー
///
/// 失敗もエラーレスポンスとして返すため、常に`Ok`になる。
async fn handle(handler: &HealthCheckHandler, request: Request) -> Result<Response<Body>, Error> {
    Ok(handler.handle(&request))
}
