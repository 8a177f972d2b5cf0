//! 格式化错误。

/// 格式化失败：值类型不受支持、pair 结构不合法、或时间值无法输出。
///
/// 非白名单运算符、参数名冲突、未知子句名都不是错误，会被静默忽略。
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("format {formatter} does not support {found}")]
    UnsupportedValue {
        formatter: &'static str,
        found: &'static str,
    },
    #[error("format malformed pair: {0}")]
    MalformedPair(String),
    #[error("format temporal value: {0}")]
    Temporal(#[from] time::error::Format),
}

impl FormatError {
    pub(crate) fn unsupported(formatter: &'static str, found: &'static str) -> Self {
        Self::UnsupportedValue { formatter, found }
    }
}
