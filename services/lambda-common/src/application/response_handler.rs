// HTTPレスポンス整形
//
// 成功結果・エラーをAPI Gateway向けのHTTPレスポンス（ステータス + JSONボディ）に変換する。
// レスポンス送信前の最後の層のため、どのメソッドもパニックせず必ず応答を返す。

use std::error::Error;

use chrono::{SecondsFormat, Utc};
use lambda_http::http::StatusCode;
use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderMap, HeaderValue,
};
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::domain::{CustomException, HttpError, ResponseInfo};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
pub const DEFAULT_ERROR_MESSAGE: &str = "Internal Server Error";
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const DEFAULT_BAD_REQUEST_MESSAGE: &str = "Bad request";
pub const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// エラーメッセージが空の場合に使用するメッセージ
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// ボディのシリアライズ自体に失敗した場合の固定ボディ
const FALLBACK_ERROR_BODY: &str =
    r#"{"success":false,"message":"Internal Server Error","error":"Unknown error occurred"}"#;

/// 成功レスポンスのボディ
#[derive(Serialize)]
struct SuccessBody<'a, T: Serialize + ?Sized> {
    success: bool,
    message: &'a str,
    data: &'a T,
    timestamp: String,
}

/// 失敗レスポンスのボディ
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// CustomExceptionの合成リターンコード
    #[serde(skip_serializing_if = "Option::is_none")]
    return_code: Option<String>,
    timestamp: String,
}

/// HTTPレスポンス整形
///
/// 状態を持たない。タイムスタンプ以外は入力のみで結果が決まる。
pub struct ResponseHandler;

impl ResponseHandler {
    /// 成功レスポンス（200）
    ///
    /// `data`のシリアライズに失敗した場合は500のエラーレスポンスを返す。
    pub fn success<T>(data: &T, message: &str) -> Response<Body>
    where
        T: Serialize + ?Sized,
    {
        Self::success_with_status(StatusCode::OK, data, message)
    }

    /// レジストリの成功情報（ステータス・メッセージ）を使った成功レスポンス
    pub fn success_with_info<T>(data: &T, info: &ResponseInfo) -> Response<Body>
    where
        T: Serialize + ?Sized,
    {
        Self::success_with_status(to_status_code(info.status), data, &info.message)
    }

    fn success_with_status<T>(status: StatusCode, data: &T, message: &str) -> Response<Body>
    where
        T: Serialize + ?Sized,
    {
        let body = SuccessBody {
            success: true,
            message,
            data,
            timestamp: timestamp(),
        };

        match serde_json::to_string(&body) {
            Ok(json) => build_response(status, Self::build_cors_headers(), json),
            Err(err) => Self::error(&err, DEFAULT_ERROR_MESSAGE),
        }
    }

    /// エラーレスポンス
    ///
    /// ステータスはエラーが持っていればそれを使い（`CustomException`・`HttpError`）、
    /// なければ500。`error`フィールドにはエラーメッセージを入れ、
    /// スタックトレースは含めない。
    pub fn error(error: &(dyn Error + 'static), message: &str) -> Response<Body> {
        let status = status_of(error);

        let error_message = error.to_string();
        let error_message = if error_message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            error_message
        };

        let return_code = error
            .downcast_ref::<CustomException>()
            .map(CustomException::return_code);

        let body = FailureBody {
            success: false,
            message,
            error: Some(error_message),
            return_code,
            timestamp: timestamp(),
        };

        build_failure_response(status, Self::build_cors_headers(), &body)
    }

    /// 404 Not Found
    pub fn not_found(message: &str) -> Response<Body> {
        Self::simple_failure(StatusCode::NOT_FOUND, message)
    }

    /// 400 Bad Request
    pub fn bad_request(message: &str) -> Response<Body> {
        Self::simple_failure(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: &str) -> Response<Body> {
        Self::simple_failure(StatusCode::UNAUTHORIZED, message)
    }

    fn simple_failure(status: StatusCode, message: &str) -> Response<Body> {
        let body = FailureBody {
            success: false,
            message,
            error: None,
            return_code: None,
            timestamp: timestamp(),
        };

        build_failure_response(status, Self::build_basic_headers(), &body)
    }

    /// 成功/エラーレスポンス用のヘッダー
    ///
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    /// - Access-Control-Allow-Headers: Content-Type,Authorization
    /// - Access-Control-Allow-Methods: GET,POST,PUT,DELETE,OPTIONS
    pub fn build_cors_headers() -> HeaderMap {
        let mut headers = Self::build_basic_headers();

        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type,Authorization"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
        );

        headers
    }

    /// 定型の失敗レスポンス用のヘッダー（Content-TypeとAllow-Originのみ）
    pub fn build_basic_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        headers
    }
}

/// エラーが持つHTTPステータス（なければ500）
fn status_of(error: &(dyn Error + 'static)) -> StatusCode {
    if let Some(exception) = error.downcast_ref::<CustomException>() {
        return to_status_code(exception.status());
    }
    if let Some(http_error) = error.downcast_ref::<HttpError>() {
        return to_status_code(http_error.status_code);
    }
    StatusCode::INTERNAL_SERVER_ERROR
}

/// 不正な値は500として扱う
fn to_status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// ISO-8601（UTC、ミリ秒、Z表記）のタイムスタンプ
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn build_failure_response(status: StatusCode, headers: HeaderMap, body: &FailureBody<'_>) -> Response<Body> {
    let json = serde_json::to_string(body).unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string());
    build_response(status, headers, json)
}

fn build_response(status: StatusCode, headers: HeaderMap, json: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(json));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
