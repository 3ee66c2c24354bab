//! ロガー
//!
//! 全レイヤーが使用するコンテキスト付きロガーのインターフェースと、
//! tracingによる本番実装を提供する。
//! プロセス起動時に1度だけ作成し、`Arc<dyn Logger>`で各サービスへ注入する。

use std::error::Error;
use std::fmt::Debug;

use tracing::{debug, error, info, warn};

use crate::domain::CustomException;

/// コンテキスト付きロガー
///
/// 同一プロセス内の複数リクエストから同時に呼ばれるため`Send + Sync`を要求する。
/// どのメソッドも同期的に完了し、パニックしない。
pub trait Logger: Send + Sync {
    fn info(&self, context: &str, message: &str, data: Option<&dyn Debug>);

    /// エラーを記録する（スタックトレースはサーバー側のログにのみ出力）
    fn error(&self, context: &str, message: &str, error: &(dyn Error + 'static));

    fn warn(&self, context: &str, message: &str, data: Option<&dyn Debug>);

    fn debug(&self, context: &str, label: &str, value: &dyn Debug);
}

/// tracingイベントとして出力するロガー
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, context: &str, message: &str, data: Option<&dyn Debug>) {
        match data {
            Some(data) => info!(context = %context, data = ?data, "{}", message),
            None => info!(context = %context, "{}", message),
        }
    }

    fn error(&self, context: &str, message: &str, err: &(dyn Error + 'static)) {
        let source_chain = source_chain(err);

        match err.downcast_ref::<CustomException>() {
            Some(exception) => error!(
                context = %context,
                error = %err,
                error_name = exception.name(),
                return_code = %exception.return_code(),
                source_chain = %source_chain,
                backtrace = %exception.backtrace(),
                "{}",
                message
            ),
            None => error!(
                context = %context,
                error = %err,
                source_chain = %source_chain,
                "{}",
                message
            ),
        }
    }

    fn warn(&self, context: &str, message: &str, data: Option<&dyn Debug>) {
        match data {
            Some(data) => warn!(context = %context, data = ?data, "{}", message),
            None => warn!(context = %context, "{}", message),
        }
    }

    fn debug(&self, context: &str, label: &str, value: &dyn Debug) {
        debug!(context = %context, value = ?value, "{}", label);
    }
}

/// エラーのsourceを辿って" <- "区切りで連結する
fn source_chain(err: &(dyn Error + 'static)) -> String {
    let mut chain = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        chain.push(source.to_string());
        current = source.source();
    }
    chain.join(" <- ")
}
