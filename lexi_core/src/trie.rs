//! `trie`：按固定字母表下标组织的前缀树，承载全部词典操作。
//!
//! 约定：
//! - 节点在插入时按需创建，每个节点独占其子节点（树，不是 DAG）
//! - 节点上的 `entry` 非空表示“有单词在此结束”；该节点同时可以是更长单词的分支点
//! - delete 只清空 `entry`，节点链保留；需要回收内存时显式调用 `compact`
use crate::{
    alphabet::{ALPHABET_SIZE, Alphabet},
    dictionary::Dictionary,
    error::TrieError,
    model::WordEntry,
};

const ALPHABET: Alphabet = Alphabet;

#[derive(Debug)]
struct Node {
    /// 子节点槽位，下标由 `Alphabet` 决定
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    /// 在此结束的词条
    entry: Option<WordEntry>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            children: [const { None }; ALPHABET_SIZE],
            entry: None,
        }
    }
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// 深度优先先序遍历：先收集自身，再按下标升序访问子节点。
    fn collect_entries<'a>(&'a self, out: &mut Vec<&'a WordEntry>) {
        if let Some(entry) = &self.entry {
            out.push(entry);
        }
        for child in self.children.iter().flatten() {
            child.collect_entries(out);
        }
    }

    fn find(&self, lowered: &str) -> Option<&Node> {
        let mut node = self;
        for ch in lowered.chars() {
            let index = ALPHABET.index_of(ch).ok()?;
            node = node.children[index].as_deref()?;
        }
        Some(node)
    }

    /// 沿下标路径前进，缺失的子节点按需创建。
    fn walk_or_create(&mut self, path: &[usize]) -> &mut Node {
        let mut node = self;
        for &index in path {
            node = &mut **node.children[index].get_or_insert_with(Box::default);
        }
        node
    }

    /// 剪掉没有词条的叶子分支，返回释放的节点数。
    fn prune(&mut self) -> usize {
        let mut freed = 0;
        for slot in &mut self.children {
            let Some(child) = slot else { continue };
            freed += child.prune();
            if child.entry.is_none() && child.is_leaf() {
                *slot = None;
                freed += 1;
            }
        }
        freed
    }
}

/// 前缀树引擎：持有根节点，对外提供查询/插入/删除/编辑/前缀枚举。
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    /// 当前词条数量
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// 词条数量（不含被 delete 清空的节点）。
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 精确查询；任一字符非法、路径缺失或终点无词条时返回 None。
    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.root.find(&word.to_lowercase())?.entry.as_ref()
    }

    /// 插入单词。
    ///
    /// - 单词含非法字符：记录日志并返回 `InvalidWord`，trie 不发生任何变化
    /// - 终点无词条：新建
    /// - 终点已有词条：把 `meaning` 以换行追加到原释义之后（不覆盖）
    pub fn insert(&mut self, word: &str, meaning: &str) -> Result<(), TrieError> {
        let target = word.to_lowercase();
        let path = match ALPHABET.indices(&target) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(word = %target, error = %err, "rejected word");
                return Err(TrieError::InvalidWord(target));
            }
        };
        let node = self.root.walk_or_create(&path);
        match &mut node.entry {
            Some(entry) => entry.append_meaning(meaning),
            None => {
                node.entry = Some(WordEntry::new(target, meaning.to_owned()));
                self.len += 1;
            }
        }
        Ok(())
    }

    /// 删除单词：只清空终点上的词条，节点链保留。
    pub fn delete(&mut self, word: &str) -> bool {
        let target = word.to_lowercase();
        let mut node = &mut self.root;
        for ch in target.chars() {
            let Ok(index) = ALPHABET.index_of(ch) else {
                tracing::debug!(word = %target, "no word found to be deleted");
                return false;
            };
            let Some(child) = node.children[index].as_deref_mut() else {
                tracing::debug!(word = %target, "no word found to be deleted");
                return false;
            };
            node = child;
        }
        if node.entry.take().is_some() {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// 覆盖释义；终点没有词条时直接创建（等价于 insert-if-absent）。
    ///
    /// 只有单词含非法字符时返回 false。
    pub fn edit(&mut self, word: &str, meaning: &str) -> bool {
        let target = word.to_lowercase();
        let Ok(path) = ALPHABET.indices(&target) else {
            return false;
        };
        let node = self.root.walk_or_create(&path);
        match &mut node.entry {
            Some(entry) => entry.set_meaning(meaning.to_owned()),
            None => {
                node.entry = Some(WordEntry::new(target, meaning.to_owned()));
                self.len += 1;
            }
        }
        true
    }

    /// 以 `prefix` 结尾的节点为根，按字母表下标顺序先序枚举整棵子树。
    ///
    /// 前缀路径不完整时返回 None；空前缀等价于 `query_all`。
    pub fn prefix_query(&self, prefix: &str) -> Option<Vec<&WordEntry>> {
        let node = self.root.find(&prefix.to_lowercase())?;
        let mut out = Vec::new();
        node.collect_entries(&mut out);
        Some(out)
    }

    /// 枚举全部词条（与 `prefix_query("")` 相同顺序）。
    pub fn query_all(&self) -> Vec<&WordEntry> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_entries(&mut out);
        out
    }

    /// 回收 delete 留下的空分支，返回释放的节点数。不影响任何词条。
    pub fn compact(&mut self) -> usize {
        let freed = self.root.prune();
        tracing::debug!(freed, "compacted trie");
        freed
    }

    /// 清空全部节点。
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Dictionary for Trie {
    fn lookup_word(&self, word: &str) -> Option<&WordEntry> {
        self.lookup(word)
    }

    fn add_word(&mut self, word: &str, meaning: &str) -> Result<(), TrieError> {
        self.insert(word, meaning)
    }

    fn delete_word(&mut self, word: &str) -> bool {
        self.delete(word)
    }

    fn edit_word(&mut self, word: &str, meaning: &str) -> bool {
        self.edit(word, meaning)
    }

    fn query_all_words(&self) -> Vec<&WordEntry> {
        self.query_all()
    }

    fn proposed_words(&self, prefix: &str) -> Option<Vec<&WordEntry>> {
        self.prefix_query(prefix)
    }
}

#[cfg(test)]
#[path = "trie_test.rs"]
mod tests;
