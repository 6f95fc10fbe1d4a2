//! `alphabet`：固定字母表到紧凑下标的双射。
//!
//! 字符集：`a-z`、`-`、空格、`.`、`'`，共 30 个符号。
//! 下标顺序即遍历顺序：`a..z` 占 0..=25，随后依次是 `-`(26)、空格(27)、`.`(28)、`'`(29)。

use crate::error::TrieError;

/// 字母表大小（每个节点的子节点槽位数）。
pub const ALPHABET_SIZE: usize = 30;

const SYMBOLS: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '-', ' ', '.', '\'',
];

/// 字母表：无状态，构造后不可变。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alphabet;

impl Alphabet {
    /// 字符 -> 下标；不在字母表内时返回 `InvalidCharacter`。
    pub fn index_of(self, ch: char) -> Result<usize, TrieError> {
        match ch {
            'a'..='z' => Ok(ch as usize - 'a' as usize),
            '-' => Ok(26),
            ' ' => Ok(27),
            '.' => Ok(28),
            '\'' => Ok(29),
            _ => Err(TrieError::InvalidCharacter(ch)),
        }
    }

    /// 下标 -> 字符（`index_of` 的逆映射）。
    pub fn symbol(self, index: usize) -> Option<char> {
        SYMBOLS.get(index).copied()
    }

    pub fn contains(self, ch: char) -> bool {
        self.index_of(ch).is_ok()
    }

    /// 把整个单词转成下标序列；遇到第一个非法字符即失败。
    pub fn indices(self, word: &str) -> Result<Vec<usize>, TrieError> {
        word.chars().map(|ch| self.index_of(ch)).collect()
    }
}

#[cfg(test)]
#[path = "alphabet_test.rs"]
mod tests;
