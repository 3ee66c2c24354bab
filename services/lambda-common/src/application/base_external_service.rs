/// 外部サービス層のエラー分類
///
/// データベース・オブジェクトストレージ・KVSなど外部依存との境界で
/// 発生したエラーを`CustomException`に変換し、外部識別子と外部コードを設定する。
/// このレイヤーはログを出力しない（ログはサービス層で1回だけ行う）。
use crate::domain::{BoxError, CustomException, ExternalCode, ExternalIdentifier};

/// 外部依存のエラーを分類してタグ付けする
///
/// - 既に`CustomException`であれば同じ値に外部識別子と外部コードを上書きして返す
/// - それ以外は未定義エラーとしてラップしてからタグ付けする
///
/// 戻り値は呼び出し元でそのまま`Err`として返すこと（成功パスには戻らない）。
pub fn classify_external<E>(
    error: E,
    external_identifier: ExternalIdentifier,
    external_code: ExternalCode,
) -> CustomException
where
    E: Into<BoxError> + 'static,
{
    CustomException::classify(error).with_external(external_identifier, external_code)
}

/// 外部依存へのアクセスを担当するサービス
///
/// 実装型は自分の外部識別子と外部コードを返すだけでよい。
///
/// ```ignore
/// let rows = self.query().map_err(|e| self.build_error(e))?;
/// ```
pub trait BaseExternalService {
    fn external_identifier(&self) -> ExternalIdentifier;

    fn external_code(&self) -> ExternalCode;

    /// エラーを分類し、この外部サービスの断片を設定した例外を返す
    fn build_error<E>(&self, error: E) -> CustomException
    where
        E: Into<BoxError> + 'static,
        Self: Sized,
    {
        classify_external(error, self.external_identifier(), self.external_code())
    }
}

/// 外部サービスの識別情報
///
/// 具象サービスはこれを保持し、`BaseExternalService`を委譲で実装する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalServiceBase {
    external_identifier: ExternalIdentifier,
    external_code: ExternalCode,
}

impl ExternalServiceBase {
    pub fn new(external_identifier: ExternalIdentifier, external_code: ExternalCode) -> Self {
        Self {
            external_identifier,
            external_code,
        }
    }
}

impl BaseExternalService for ExternalServiceBase {
    fn external_identifier(&self) -> ExternalIdentifier {
        self.external_identifier
    }

    fn external_code(&self) -> ExternalCode {
        self.external_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_codes;
    use crate::domain::response_info::NOT_FOUND_ERROR;
    use std::error::Error;

    fn object_storage() -> ExternalServiceBase {
        ExternalServiceBase::new(ExternalIdentifier::ObjectStorage, ExternalCode::from_static("042"))
    }

    /// 未分類のエラーはラップされ、外部断片が設定される
    #[test]
    fn test_build_error_wraps_plain_error() {
        let service = object_storage();

        let exception = service.build_error(std::io::Error::other("timeout"));

        assert_eq!(exception.external_identifier(), ExternalIdentifier::ObjectStorage);
        assert_eq!(exception.external_code().as_str(), "042");
        assert_eq!(exception.action_code(), action_codes::UNDEFINED);
        assert_eq!(exception.message(), "timeout");
        assert_eq!(exception.return_code(), "00002042999");
    }

    /// 分類済みの例外は二重にラップされず、断片だけが上書きされる
    #[test]
    fn test_build_error_retags_existing_exception() {
        let service = object_storage();
        let original = CustomException::new(std::io::Error::other("gone"), NOT_FOUND_ERROR);

        let exception = service.build_error(original);

        assert_eq!(exception.action_code().as_str(), "001");
        assert_eq!(exception.status(), 404);
        assert_eq!(exception.return_code(), "00002042001");
        assert!(exception.source().unwrap().downcast_ref::<CustomException>().is_none());
    }

    /// Box化して返された例外も断片とステータスを失わない
    #[test]
    fn test_build_error_retags_boxed_exception() {
        let service = object_storage();
        let inner: Result<(), Box<CustomException>> = Err(Box::new(CustomException::new(
            std::io::Error::other("gone"),
            NOT_FOUND_ERROR,
        )));

        let exception = inner.map_err(|e| service.build_error(e)).unwrap_err();

        assert_eq!(exception.status(), 404);
        assert_eq!(exception.return_code(), "00002042001");
    }

    /// 2回続けて分類しても新しい例外は作られない
    #[test]
    fn test_build_error_twice_is_idempotent() {
        let inner = ExternalServiceBase::new(ExternalIdentifier::Database, ExternalCode::from_static("001"));
        let outer = object_storage();

        let first = inner.build_error(std::io::Error::other("boom"));
        let second = outer.build_error(first);

        // 後から呼んだレイヤーの値で上書きされる
        assert_eq!(second.external_identifier(), ExternalIdentifier::ObjectStorage);
        assert_eq!(second.external_code().as_str(), "042");
        // sourceは元のネイティブエラーのまま
        assert!(second.source().unwrap().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_classify_external_free_function() {
        let exception = classify_external(
            "connection refused",
            ExternalIdentifier::KeyValueStore,
            ExternalCode::from_static("007"),
        );

        assert_eq!(exception.return_code(), "00003007999");
    }
}
