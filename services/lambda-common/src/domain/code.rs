// リターンコードの断片（フラグメント）
//
// 合成リターンコードは区切り文字なしの位置連結で表現されるため、
// 各断片の桁数を型で固定し、11桁の不変条件を構築時点で保証する。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// コード断片のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// 桁数が一致しない
    #[error("Invalid code width: expected {expected} digits, got {actual}")]
    InvalidWidth { expected: usize, actual: usize },
    /// 数字以外の文字を含む
    #[error("Code must contain only ASCII digits: {0}")]
    NonDigit(String),
    /// 未定義の外部システム識別子
    #[error("Unknown external identifier: {0}")]
    UnknownExternalIdentifier(String),
}

/// 固定桁のASCII数字コード
///
/// `WIDTH`桁の数字のみを保持する。桁数違いや数字以外の文字は
/// `from_static`ではconst評価エラー、`parse`では`CodeError`になる。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code<const WIDTH: usize>([u8; WIDTH]);

/// Lambda関数（エントリポイント）識別子（3桁）
pub type LambdaCode = Code<3>;

/// サービス層識別子（1桁）
pub type ServiceCode = Code<1>;

/// 外部リソース（テーブル等）識別子（3桁）
pub type ExternalCode = Code<3>;

/// 終端の状態を表すアクションコード（3桁）
pub type ActionCode = Code<3>;

impl<const WIDTH: usize> Code<WIDTH> {
    /// 文字列リテラルからコードを作成（const文脈用）
    ///
    /// # Panics
    /// 桁数が`WIDTH`と異なる、または数字以外を含む場合。
    /// `const`アイテムで使用した場合はコンパイルエラーになる。
    pub const fn from_static(code: &'static str) -> Self {
        let bytes = code.as_bytes();
        assert!(bytes.len() == WIDTH, "code width mismatch");

        let mut digits = [0u8; WIDTH];
        let mut i = 0;
        while i < WIDTH {
            assert!(bytes[i].is_ascii_digit(), "code must be ASCII digits");
            digits[i] = bytes[i];
            i += 1;
        }
        Self(digits)
    }

    /// 実行時の文字列を検証してコードを作成
    pub fn parse(code: &str) -> Result<Self, CodeError> {
        let bytes = code.as_bytes();
        if bytes.len() != WIDTH {
            return Err(CodeError::InvalidWidth {
                expected: WIDTH,
                actual: bytes.len(),
            });
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CodeError::NonDigit(code.to_string()));
        }

        let mut digits = [0u8; WIDTH];
        digits.copy_from_slice(bytes);
        Ok(Self(digits))
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        // 構築時にASCII数字のみであることを保証している
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// 桁数
    pub const fn width() -> usize {
        WIDTH
    }
}

impl Code<1> {
    /// サービスコードのデフォルト値（"0"）
    pub const DEFAULT: Self = Self::from_static("0");
}

impl Code<3> {
    /// Lambdaコード・外部コードのデフォルト値（"000"）
    pub const DEFAULT: Self = Self::from_static("000");
}

impl<const WIDTH: usize> fmt::Display for Code<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const WIDTH: usize> fmt::Debug for Code<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({:?})", self.as_str())
    }
}

impl<const WIDTH: usize> FromStr for Code<WIDTH> {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 外部システム識別子（1桁）
///
/// 障害が発生した外部依存の種別を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExternalIdentifier {
    /// 外部依存なし（"0"）
    #[default]
    None,
    /// データベース（"1"）
    Database,
    /// オブジェクトストレージ（"2"）
    ObjectStorage,
    /// キーバリューストア（"3"）
    KeyValueStore,
}

impl ExternalIdentifier {
    /// 1桁のコード断片を取得
    pub const fn code(self) -> Code<1> {
        match self {
            ExternalIdentifier::None => Code::from_static("0"),
            ExternalIdentifier::Database => Code::from_static("1"),
            ExternalIdentifier::ObjectStorage => Code::from_static("2"),
            ExternalIdentifier::KeyValueStore => Code::from_static("3"),
        }
    }
}

impl fmt::Display for ExternalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}

impl TryFrom<&str> for ExternalIdentifier {
    type Error = CodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "0" => Ok(ExternalIdentifier::None),
            "1" => Ok(ExternalIdentifier::Database),
            "2" => Ok(ExternalIdentifier::ObjectStorage),
            "3" => Ok(ExternalIdentifier::KeyValueStore),
            other => Err(CodeError::UnknownExternalIdentifier(other.to_string())),
        }
    }
}

/// 全サービス共通のアクションコード（3桁）
pub mod action_codes {
    use super::ActionCode;

    pub const SUCCESS: ActionCode = ActionCode::from_static("000");
    pub const NOT_FOUND: ActionCode = ActionCode::from_static("001");
    pub const INVALID_INPUT: ActionCode = ActionCode::from_static("002");
    pub const UNAUTHORIZED: ActionCode = ActionCode::from_static("003");
    pub const FORBIDDEN: ActionCode = ActionCode::from_static("004");
    /// 重複したリソースの作成など
    pub const CONFLICT: ActionCode = ActionCode::from_static("005");
    pub const INTERNAL_SERVER_ERROR: ActionCode = ActionCode::from_static("998");
    pub const UNDEFINED: ActionCode = ActionCode::from_static("999");
}

/// データベーステーブルの外部コード（3桁）
pub mod table_codes {
    use super::ExternalCode;

    /// サンプルテーブル
    pub const EXAMPLE_TABLE: ExternalCode = ExternalCode::from_static("001");
}
