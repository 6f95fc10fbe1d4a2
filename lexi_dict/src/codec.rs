//! `codec`：词条与文本行之间的转换。
//!
//! 行格式：`TARGET<TAB>MEANING`
//! - 释义中的换行写出时替换为单个反斜杠，读入时再还原为换行
//! - 只按第一个 TAB 切分，释义里可以继续出现 TAB
//!
//! 注意：这个转义是有损的，释义里原本的反斜杠读回后会变成换行。
//! 同样有损的还有行尾的 `\r`：按行读入时 CRLF 整体被当作行结束符，
//! 释义末尾的 `\r` 读回后会丢失。

use lexi_core::model::WordEntry;

/// 单词与释义之间的分隔符
pub const SEPARATOR: char = '\t';
/// 释义内换行的替代字符
pub const NEWLINE_ESCAPE: char = '\\';

/// 行内找不到分隔符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing tab separator")]
pub struct MalformedLine;

/// 解析一行：返回 (单词, 已还原换行的释义)。
pub fn decode_line(line: &str) -> Result<(&str, String), MalformedLine> {
    let (target, meaning) = line.split_once(SEPARATOR).ok_or(MalformedLine)?;
    Ok((target, meaning.replace(NEWLINE_ESCAPE, "\n")))
}

/// 编码一个词条，结果带行尾换行符。
pub fn encode_entry(entry: &WordEntry) -> String {
    let meaning = entry.meaning().replace('\n', &NEWLINE_ESCAPE.to_string());
    format!("{}{SEPARATOR}{meaning}\n", entry.target())
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
