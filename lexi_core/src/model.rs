use std::fmt;

/// 词条：规范化（小写）的单词 + 可变的释义。
///
/// 注意：同一个单词的多个释义以 `\n` 拼接在 `meaning` 内，
/// 而不是拆成多个词条。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// 单词（小写，创建后不可变）
    target: String,
    /// 释义（可能含多行）
    meaning: String,
}

impl WordEntry {
    /// 由 trie 调用；`target` 必须已经小写且通过字母表校验。
    pub(crate) fn new(target: String, meaning: String) -> Self {
        Self { target, meaning }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// 逐条释义（按换行切分）。
    pub fn senses(&self) -> impl Iterator<Item = &str> {
        self.meaning.split('\n')
    }

    /// 追加一条释义（insert 的合并语义）。
    pub(crate) fn append_meaning(&mut self, meaning: &str) {
        self.meaning.push('\n');
        self.meaning.push_str(meaning);
    }

    /// 整体覆盖释义（edit 的语义）。
    pub(crate) fn set_meaning(&mut self, meaning: String) {
        self.meaning = meaning;
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.target, self.meaning)
    }
}
