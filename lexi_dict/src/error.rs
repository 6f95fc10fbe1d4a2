use std::io;

/// `lexi_dict` 的 Result 类型，默认错误为 [`TextError`]。
pub type Result<T, E = TextError> = std::result::Result<T, E>;

/// 导入/导出错误。
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// 某一行缺少 TAB 分隔符（`line` 从 1 开始计数）
    #[error("line {line} has no tab separator: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// 文件不存在/不可读/不可写
    #[error(transparent)]
    Io(#[from] io::Error),
}
