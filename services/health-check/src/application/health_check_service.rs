/// ヘルスチェックの業務ロジック
///
/// リクエストボディの解析と、処理時刻・リクエストタイムスタンプの組み立てを行う。
/// 失敗はすべて`build_error`を通し、サービスコード付きの`CustomException`として返す。
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use lambda_common::application::ServiceBase;
use lambda_common::{BaseService, CustomException, Logger};

use crate::domain::{DATE_NOT_FOUND, HEALTH_CHECK_SERVICE_CODE, HealthCheckRequest, HealthCheckResponse};
use crate::infrastructure::{Clock, SystemClock};

/// ログ相関用のコンテキスト名
pub const SERVICE_CONTEXT: &str = "HealthCheckService";

pub struct HealthCheckService {
    base: ServiceBase,
    clock: Arc<dyn Clock>,
}

impl HealthCheckService {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_clock(logger, Arc::new(SystemClock))
    }

    /// 時刻の取得元を指定して作成
    pub fn with_clock(logger: Arc<dyn Logger>, clock: Arc<dyn Clock>) -> Self {
        Self {
            base: ServiceBase::new(SERVICE_CONTEXT, HEALTH_CHECK_SERVICE_CODE, logger),
            clock,
        }
    }

    /// リクエストボディを解析する
    ///
    /// 空のボディはタイムスタンプなしのリクエストとして扱う。
    /// JSONとして不正なボディは未定義エラー（500）になる。
    pub fn parse_request(&self, body: &[u8]) -> Result<HealthCheckRequest, CustomException> {
        if body.is_empty() {
            return Ok(HealthCheckRequest::default());
        }

        serde_json::from_slice(body).map_err(|e| self.build_error(e))
    }

    /// ヘルスチェックを実行する
    ///
    /// `requestTimestamp`が未指定または0の場合は処理時刻のミリ秒を返す。
    /// 日時として表現できないタイムスタンプは`DATE_NOT_FOUND`になる。
    pub fn health_check(
        &self,
        request: &HealthCheckRequest,
    ) -> Result<HealthCheckResponse, CustomException> {
        let now = self.clock.now();

        let request_timestamp = match request.request_timestamp {
            Some(timestamp) if timestamp != 0 => self.validate_timestamp(timestamp)?,
            _ => now.timestamp_millis(),
        };

        let health_check_time = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.logger()
            .info(SERVICE_CONTEXT, "Health Check Time", Some(&health_check_time));

        Ok(HealthCheckResponse {
            is_healthy: true,
            health_check_time,
            request_timestamp,
        })
    }

    fn validate_timestamp(&self, timestamp: i64) -> Result<i64, CustomException> {
        match DateTime::<Utc>::from_timestamp_millis(timestamp) {
            Some(_) => Ok(timestamp),
            None => Err(self.build_error(CustomException::from_info(
                DATE_NOT_FOUND,
                format!("requestTimestamp is out of range: {}", timestamp),
            ))),
        }
    }
}

impl BaseService for HealthCheckService {
    fn context(&self) -> &str {
        self.base.context()
    }

    fn service_code(&self) -> lambda_common::domain::ServiceCode {
        self.base.service_code()
    }

    fn logger(&self) -> &dyn Logger {
        self.base.logger()
    }
}
