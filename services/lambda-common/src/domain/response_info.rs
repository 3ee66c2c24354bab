// レスポンス情報（ステータス・リターンコード・メッセージ）とレジストリ
//
// 終端の結果を表す不変の三つ組。レジストリのエントリは`const`として定義し、
// 作成後に変更されることはない。

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::http_status;

/// レスポンス情報
///
/// - `status`: HTTPステータスコード
/// - `return_code`: エラー/成功状態を識別するリターンコード
/// - `message`: 人間向けのメッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    pub status: u16,
    pub return_code: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl ResponseInfo {
    /// レジストリ用のconstコンストラクタ
    pub const fn new(status: u16, return_code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            return_code: Cow::Borrowed(return_code),
            message: Cow::Borrowed(message),
        }
    }

    /// 実行時に組み立てた値から作成
    pub fn owned(status: u16, return_code: String, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            return_code: Cow::Owned(return_code),
            message: message.into(),
        }
    }
}

// ===========================================
// エラー情報レジストリ
// ===========================================

/// 未分類のエラー（ネイティブエラーをラップする際の既定値）
pub const UNDEFINED_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::INTERNAL_SERVER_ERROR, "999", "Undefined Error");

pub const INTERNAL_SERVER_ERROR_INFO: ResponseInfo =
    ResponseInfo::new(http_status::INTERNAL_SERVER_ERROR, "998", "Internal Server Error");

pub const NOT_FOUND_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::NOT_FOUND, "001", "Resource Not Found");

pub const INVALID_INPUT_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::BAD_REQUEST, "002", "Invalid Input");

pub const UNAUTHORIZED_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::UNAUTHORIZED, "003", "Unauthorized");

pub const FORBIDDEN_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::FORBIDDEN, "004", "Forbidden");

pub const CONFLICT_ERROR: ResponseInfo =
    ResponseInfo::new(http_status::CONFLICT, "005", "Resource Conflict");

// ===========================================
// 成功情報レジストリ
// ===========================================

pub const SUCCESS_INFO: ResponseInfo =
    ResponseInfo::new(http_status::SUCCESS, "000", "Request Success");

pub const CREATED_INFO: ResponseInfo =
    ResponseInfo::new(http_status::CREATED, "000", "Data Created");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::code::{ActionCode, action_codes};

    fn all_entries() -> Vec<ResponseInfo> {
        vec![
            UNDEFINED_ERROR,
            INTERNAL_SERVER_ERROR_INFO,
            NOT_FOUND_ERROR,
            INVALID_INPUT_ERROR,
            UNAUTHORIZED_ERROR,
            FORBIDDEN_ERROR,
            CONFLICT_ERROR,
            SUCCESS_INFO,
            CREATED_INFO,
        ]
    }

    /// 全エントリのリターンコードが3桁のアクションコードである
    #[test]
    fn test_registry_return_codes_are_action_codes() {
        for info in all_entries() {
            assert!(
                ActionCode::parse(&info.return_code).is_ok(),
                "{} is not a valid action code",
                info.return_code
            );
        }
    }

    /// 全エントリのステータスが有効なHTTPステータスである
    #[test]
    fn test_registry_statuses_are_valid_http() {
        for info in all_entries() {
            assert!(lambda_http::http::StatusCode::from_u16(info.status).is_ok());
        }
    }

    #[test]
    fn test_undefined_error_entry() {
        assert_eq!(UNDEFINED_ERROR.status, 500);
        assert_eq!(UNDEFINED_ERROR.return_code, action_codes::UNDEFINED.as_str());
        assert_eq!(UNDEFINED_ERROR.message, "Undefined Error");
    }

    #[test]
    fn test_success_entries() {
        assert_eq!(SUCCESS_INFO.status, 200);
        assert_eq!(CREATED_INFO.status, 201);
        assert_eq!(SUCCESS_INFO.return_code, action_codes::SUCCESS.as_str());
        assert_eq!(CREATED_INFO.message, "Data Created");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(&NOT_FOUND_ERROR).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": 404,
                "returnCode": "001",
                "message": "Resource Not Found"
            })
        );
    }
}
