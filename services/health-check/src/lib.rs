//! ヘルスチェックLambda
//!
//! 現在時刻（ISO-8601）とリクエストで受け取ったタイムスタンプを返す。

// ドメイン層モジュール
pub mod domain;

// アプリケーション層モジュール
pub mod application;

// インフラストラクチャ層モジュール
pub mod infrastructure;
