/// データベース層の外部サービス
///
/// テーブルごとのサービスはテーブルコードを指定してこれを作成する。
/// 外部識別子は常に`ExternalIdentifier::Database`。
use crate::application::base_external_service::{BaseExternalService, ExternalServiceBase};
use crate::domain::{ExternalCode, ExternalIdentifier, table_codes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseService {
    base: ExternalServiceBase,
}

impl DatabaseService {
    /// テーブルコードを指定して作成
    pub fn new(table_code: ExternalCode) -> Self {
        Self {
            base: ExternalServiceBase::new(ExternalIdentifier::Database, table_code),
        }
    }

    /// サンプルテーブル用のサービス
    pub fn example_table() -> Self {
        Self::new(table_codes::EXAMPLE_TABLE)
    }

    pub fn table_code(&self) -> ExternalCode {
        self.base.external_code()
    }
}

impl BaseExternalService for DatabaseService {
    fn external_identifier(&self) -> ExternalIdentifier {
        self.base.external_identifier()
    }

    fn external_code(&self) -> ExternalCode {
        self.base.external_code()
    }
}
