//! Lambda関数共通ライブラリ
//!
//! - 合成リターンコード（lambda + service + 外部識別子 + 外部コード + action）を持つ例外
//! - サービス層・外部サービス層でのエラー分類とタグ付け
//! - HTTPレスポンスの整形
//! - 構造化ログと実行環境設定

// ドメイン層モジュール
pub mod domain;

// アプリケーション層モジュール
pub mod application;

// インフラストラクチャ層モジュール
pub mod infrastructure;

pub use application::{BaseExternalService, BaseService, ResponseHandler};
pub use domain::{CustomException, ResponseInfo};
pub use infrastructure::Logger;
