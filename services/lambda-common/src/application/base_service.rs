/// サービス層のエラー分類
///
/// 業務ロジックを担当するサービスの境界で、エラーを1回だけログに記録し、
/// `CustomException`へ分類してサービスコードを設定する。
use std::sync::Arc;

use crate::domain::{BoxError, CustomException, ServiceCode};
use crate::infrastructure::Logger;

/// サービス層でエラーを記録する際のメッセージ
pub const ERROR_LOG_MESSAGE: &str = "Error occurred";

/// サービス層のエラーを記録・分類してタグ付けする
///
/// 1. 分類済みかどうかに関わらず`logger.error`を1回だけ呼ぶ
/// 2. 既に`CustomException`であれば同じ値にサービスコードを上書きして返す
/// 3. それ以外は未定義エラーとしてラップしてからサービスコードを設定する
///
/// 戻り値は呼び出し元でそのまま`Err`として返すこと（成功パスには戻らない）。
pub fn classify_service<E>(
    error: E,
    logger: &dyn Logger,
    context: &str,
    service_code: ServiceCode,
) -> CustomException
where
    E: Into<BoxError> + 'static,
{
    let name = crate::domain::custom_exception::error_name::<E>();
    let error = error.into();

    logger.error(context, ERROR_LOG_MESSAGE, &*error);

    CustomException::classify_boxed(error, name).with_service_code(service_code)
}

/// 業務ロジックを担当するサービス
///
/// ```ignore
/// let value = parse(body).map_err(|e| self.build_error(e))?;
/// ```
pub trait BaseService {
    /// ログ相関用のコンテキスト名
    fn context(&self) -> &str;

    fn service_code(&self) -> ServiceCode;

    fn logger(&self) -> &dyn Logger;

    /// エラーを記録・分類し、このサービスのコードを設定した例外を返す
    fn build_error<E>(&self, error: E) -> CustomException
    where
        E: Into<BoxError> + 'static,
        Self: Sized,
    {
        classify_service(error, self.logger(), self.context(), self.service_code())
    }
}

/// サービスの識別情報と依存
///
/// 具象サービスはこれを保持し、`BaseService`を委譲で実装する。
/// ロガーはプロセス起動時に作成したものを注入する。
#[derive(Clone)]
pub struct ServiceBase {
    context: String,
    service_code: ServiceCode,
    logger: Arc<dyn Logger>,
}

impl ServiceBase {
    pub fn new(context: impl Into<String>, service_code: ServiceCode, logger: Arc<dyn Logger>) -> Self {
        Self {
            context: context.into(),
            service_code,
            logger,
        }
    }
}

impl std::fmt::Debug for ServiceBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceBase")
            .field("context", &self.context)
            .field("service_code", &self.service_code)
            .finish_non_exhaustive()
    }
}

impl BaseService for ServiceBase {
    fn context(&self) -> &str {
        &self.context
    }

    fn service_code(&self) -> ServiceCode {
        self.service_code
    }

    fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::base_external_service::{BaseExternalService, ExternalServiceBase};
    use crate::domain::response_info::CONFLICT_ERROR;
    use crate::domain::{ExternalCode, ExternalIdentifier, action_codes};
    use crate::infrastructure::logger::tests::{LogLevel, MockLogger};

    fn create_test_service(logger: &MockLogger) -> ServiceBase {
        ServiceBase::new("UserService", ServiceCode::from_static("7"), Arc::new(logger.clone()))
    }

    /// 未分類のエラーはラップされ、サービスコードが設定される
    #[test]
    fn test_build_error_wraps_plain_error() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);

        let exception = service.build_error(std::io::Error::other("bad"));

        assert_eq!(exception.service_code().as_str(), "7");
        assert_eq!(exception.action_code(), action_codes::UNDEFINED);
        assert_eq!(exception.return_code(), "00070000999");
    }

    /// エラーはコンテキスト付きで1回だけ記録される
    #[test]
    fn test_build_error_logs_once_with_context() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);

        let _ = service.build_error(std::io::Error::other("bad"));

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].context, "UserService");
        assert_eq!(entries[0].message, ERROR_LOG_MESSAGE);
        assert_eq!(entries[0].detail.as_deref(), Some("bad"));
    }

    /// 分類済みの例外も必ず記録され、二重にラップされない
    #[test]
    fn test_build_error_logs_and_retags_existing_exception() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);
        let original = CustomException::new(std::io::Error::other("dup"), CONFLICT_ERROR);

        let exception = service.build_error(original);

        assert_eq!(logger.count(LogLevel::Error), 1);
        assert_eq!(exception.status(), 409);
        assert_eq!(exception.return_code(), "00070000005");
    }

    /// 同じ例外を2回分類しても、その都度1回ずつ記録される
    #[test]
    fn test_build_error_twice_logs_each_call() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);

        let first = service.build_error(std::io::Error::other("bad"));
        let second = service.build_error(first);

        assert_eq!(logger.count(LogLevel::Error), 2);
        assert_eq!(second.return_code(), "00070000999");
        assert_eq!(second.message(), "bad");
    }

    /// 外部サービス層 → サービス層の順に断片が積み上がる
    #[test]
    fn test_external_then_service_tagging() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);
        let database =
            ExternalServiceBase::new(ExternalIdentifier::Database, ExternalCode::from_static("042"));

        let from_external = database.build_error(std::io::Error::other("malformed input"));
        let exception = service.build_error(from_external);

        assert_eq!(exception.external_identifier(), ExternalIdentifier::Database);
        assert_eq!(exception.external_code().as_str(), "042");
        assert_eq!(exception.service_code().as_str(), "7");
        assert_eq!(exception.action_code().as_str(), "999");
        assert_eq!(exception.get_response_info().return_code, "00071042999");
    }

    #[test]
    fn test_classify_service_free_function() {
        let logger = MockLogger::new();

        let exception = classify_service(
            "oops",
            &logger,
            "AdHocService",
            ServiceCode::from_static("2"),
        );

        assert_eq!(exception.service_code().as_str(), "2");
        assert_eq!(logger.entries()[0].context, "AdHocService");
    }

    #[test]
    fn test_service_base_debug_omits_logger() {
        let logger = MockLogger::new();
        let service = create_test_service(&logger);

        let debug = format!("{:?}", service);
        assert!(debug.contains("UserService"));
    }
}
