// 合成リターンコードを持つ例外
//
// ネイティブエラーをラップし、各レイヤーが自分の担当する断片を設定しながら
// 上位へ伝播させる。最終的なリターンコードは保持せず、
// `get_response_info()`で都度連結する。

use std::any::TypeId;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

use super::code::{ActionCode, ExternalCode, ExternalIdentifier, LambdaCode, ServiceCode, action_codes};
use super::response_info::{ResponseInfo, UNDEFINED_ERROR};

/// スレッド間で受け渡し可能な型消去済みエラー
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// `from_info`で作成した例外の名前
const CUSTOM_EXCEPTION_NAME: &str = "CustomException";

/// 型消去済みエラーをラップした例外の名前
const ERASED_ERROR_NAME: &str = "Error";

/// 合成リターンコード付き例外
///
/// 断片の並び: `lambda(3) + service(1) + external_identifier(1) + external_code(3) + action(3)`
///
/// 1回の障害につき1インスタンスを作成し、リクエストを跨いで再利用しない。
/// 本体はヒープに置き、`Result<_, CustomException>`をポインタ1個分に保つ。
#[derive(Debug)]
pub struct CustomException {
    inner: Box<ExceptionBody>,
}

#[derive(Debug)]
struct ExceptionBody {
    /// ラップしたエラーの型名
    name: &'static str,
    /// ラップしたエラーのメッセージ
    message: String,
    /// ラップしたネイティブエラー
    source: Option<BoxError>,
    /// 作成時点のスタックトレース（サーバー側のログ専用）
    backtrace: Backtrace,
    /// 最終的に返すステータスとメッセージ
    response_info: ResponseInfo,
    action_code: ActionCode,
    external_identifier: ExternalIdentifier,
    external_code: ExternalCode,
    service_code: ServiceCode,
    lambda_code: LambdaCode,
}

impl CustomException {
    /// ネイティブエラーをラップして例外を作成
    ///
    /// `action_code`は`response_info.return_code`で初期化し、
    /// その他の断片はデフォルト値（"000", "0", "0", "000"）になる。
    pub fn new<E>(error: E, response_info: ResponseInfo) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        Self::wrap(error.into(), error_name::<E>(), response_info)
    }

    /// ネイティブエラーを伴わない業務上の失敗から例外を作成
    pub fn from_info(response_info: ResponseInfo, message: impl Into<String>) -> Self {
        Self::build(CUSTOM_EXCEPTION_NAME, message.into(), None, response_info)
    }

    /// 分類済みならその例外をそのまま返し、未分類なら未定義エラーとしてラップする
    ///
    /// 既に`CustomException`である値（`Box<CustomException>`を含む）を
    /// 二重にラップすることはない。
    pub fn classify<E>(error: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        let name = error_name::<E>();
        Self::classify_boxed(error.into(), name)
    }

    pub(crate) fn classify_boxed(error: BoxError, name: &'static str) -> Self {
        let error = match error.downcast::<CustomException>() {
            Ok(exception) => return *exception,
            Err(other) => other,
        };

        match error.downcast::<Box<CustomException>>() {
            Ok(exception) => **exception,
            Err(other) => Self::wrap(other, name, UNDEFINED_ERROR),
        }
    }

    fn wrap(source: BoxError, name: &'static str, response_info: ResponseInfo) -> Self {
        let message = source.to_string();
        Self::build(name, message, Some(source), response_info)
    }

    fn build(
        name: &'static str,
        message: String,
        source: Option<BoxError>,
        response_info: ResponseInfo,
    ) -> Self {
        // レジストリ外の不正なコードは未定義エラー扱いにする
        let action_code =
            ActionCode::parse(&response_info.return_code).unwrap_or(action_codes::UNDEFINED);

        Self {
            inner: Box::new(ExceptionBody {
                name,
                message,
                source,
                // RUST_BACKTRACEの設定に関わらず取得する
                backtrace: Backtrace::force_capture(),
                response_info,
                action_code,
                external_identifier: ExternalIdentifier::None,
                external_code: ExternalCode::DEFAULT,
                service_code: ServiceCode::DEFAULT,
                lambda_code: LambdaCode::DEFAULT,
            }),
        }
    }

    // ===========================================
    // 断片の設定（後勝ちで上書き）
    // ===========================================

    pub fn set_external_identifier(&mut self, external_identifier: ExternalIdentifier) {
        self.inner.external_identifier = external_identifier;
    }

    pub fn set_external_code(&mut self, external_code: ExternalCode) {
        self.inner.external_code = external_code;
    }

    pub fn set_service_code(&mut self, service_code: ServiceCode) {
        self.inner.service_code = service_code;
    }

    pub fn set_lambda_code(&mut self, lambda_code: LambdaCode) {
        self.inner.lambda_code = lambda_code;
    }

    /// 外部識別子と外部コードを設定した値を返す（値渡し用）
    pub fn with_external(
        mut self,
        external_identifier: ExternalIdentifier,
        external_code: ExternalCode,
    ) -> Self {
        self.set_external_identifier(external_identifier);
        self.set_external_code(external_code);
        self
    }

    pub fn with_service_code(mut self, service_code: ServiceCode) -> Self {
        self.set_service_code(service_code);
        self
    }

    pub fn with_lambda_code(mut self, lambda_code: LambdaCode) -> Self {
        self.set_lambda_code(lambda_code);
        self
    }

    // ===========================================
    // 参照
    // ===========================================

    pub fn name(&self) -> &str {
        self.inner.name
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.inner.backtrace
    }

    /// 保持しているResponseInfoのHTTPステータス
    pub fn status(&self) -> u16 {
        self.inner.response_info.status
    }

    pub fn action_code(&self) -> ActionCode {
        self.inner.action_code
    }

    pub fn external_identifier(&self) -> ExternalIdentifier {
        self.inner.external_identifier
    }

    pub fn external_code(&self) -> ExternalCode {
        self.inner.external_code
    }

    pub fn service_code(&self) -> ServiceCode {
        self.inner.service_code
    }

    pub fn lambda_code(&self) -> LambdaCode {
        self.inner.lambda_code
    }

    /// 現在の断片から合成したリターンコード（常に11桁）
    pub fn return_code(&self) -> String {
        let inner = &self.inner;
        format!(
            "{}{}{}{}{}",
            inner.lambda_code,
            inner.service_code,
            inner.external_identifier,
            inner.external_code,
            inner.action_code
        )
    }

    /// 最終的なレスポンス情報を作成
    ///
    /// ステータスとメッセージは保持しているResponseInfoから複写し、
    /// リターンコードは呼び出し時点の断片から合成する。副作用はない。
    pub fn get_response_info(&self) -> ResponseInfo {
        ResponseInfo::owned(
            self.inner.response_info.status,
            self.return_code(),
            self.inner.response_info.message.clone(),
        )
    }
}

impl fmt::Display for CustomException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

impl Error for CustomException {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// ラップ対象エラーの名前
///
/// 型消去済みの`BoxError`からは元の型が分からないため"Error"、
/// それ以外は型名（ログ表示用）とする。
pub(crate) fn error_name<E: 'static>() -> &'static str {
    if TypeId::of::<E>() == TypeId::of::<BoxError>() {
        ERASED_ERROR_NAME
    } else {
        std::any::type_name::<E>()
    }
}
