//! `error`：core 层的错误类型。
//!
//! 约定：“查不到”永远不是错误，统一用 `Option`/`bool` 表达。

/// 单词合法性错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// 字符不在固定字母表内
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    /// 单词含有非法字符，整个操作被放弃
    #[error("invalid word {0:?}")]
    InvalidWord(String),
}
