use serde::{Deserialize, Serialize};

/// ヘルスチェックのリクエストボディ
///
/// ボディが空の場合は既定値（タイムスタンプなし）として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckRequest {
    /// 呼び出し側のタイムスタンプ（UNIXエポックからのミリ秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timestamp: Option<i64>,
}

/// ヘルスチェックの結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub is_healthy: bool,
    /// 処理時刻（ISO-8601, UTC）
    pub health_check_time: String,
    /// リクエストのタイムスタンプ。指定がなければ処理時刻のミリ秒
    pub request_timestamp: i64,
}
