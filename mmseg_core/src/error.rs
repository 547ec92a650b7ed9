//! 错误类型。
//!
//! 分词本身不会失败：无法匹配的字符按单字强制切出（见 `matcher`）。
//! 这里只有构造期的配置错误，以及字符串解析错误。

/// 默认以 [`SegmentError`] 为错误类型的 Result。
pub type Result<T, E = SegmentError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// 配置错误：例如最大词长为 0，扫描循环一次都不会执行。
    #[error("配置错误：{0}")]
    Configuration(String),

    /// 未知的匹配模式名。
    #[error("未知的匹配模式 `{0}`（可选：forward / reverse / bidirectional）")]
    UnknownMode(String),
}

impl SegmentError {
    pub(crate) fn configuration<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Configuration(msg.into())
    }
}
