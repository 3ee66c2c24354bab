// ドメイン層モジュール
pub mod code;
pub mod custom_exception;
pub mod http_error;
pub mod http_status;
pub mod response_info;

// 再エクスポート
pub use code::{
    ActionCode, Code, CodeError, ExternalCode, ExternalIdentifier, LambdaCode, ServiceCode,
    action_codes, table_codes,
};
pub use custom_exception::{BoxError, CustomException};
pub use http_error::HttpError;
pub use response_info::ResponseInfo;
