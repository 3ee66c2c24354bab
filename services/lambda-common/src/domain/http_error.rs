// 明示的なHTTPステータスを持つエラー
//
// ResponseHandler::errorに渡すと、500ではなく指定したステータスで応答する。

use thiserror::Error;

/// HTTPステータス付きエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    pub status_code: u16,
    pub message: String,
}

impl HttpError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}
