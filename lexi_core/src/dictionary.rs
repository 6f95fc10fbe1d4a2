use crate::{error::TrieError, model::WordEntry};

/// 词典抽象：面向 CLI/GUI/小游戏等调用方的统一接口。
///
/// 约定：
/// - 所有单词在遍历前先转小写；释义原样保存
/// - 返回的列表都是本次调用新建的快照，不保留迭代状态
/// - 实现不做内部加锁；多线程宿主需要自行串行化访问
pub trait Dictionary {
    /// 精确查询。
    fn lookup_word(&self, word: &str) -> Option<&WordEntry>;

    /// 添加单词；已存在时把释义追加为新的一行。
    fn add_word(&mut self, word: &str, meaning: &str) -> Result<(), TrieError>;

    /// 删除单词；没有对应词条时返回 false。
    fn delete_word(&mut self, word: &str) -> bool;

    /// 覆盖释义（不存在则创建）；仅在单词含非法字符时返回 false。
    fn edit_word(&mut self, word: &str, meaning: &str) -> bool;

    /// 按遍历顺序列出全部词条。
    fn query_all_words(&self) -> Vec<&WordEntry>;

    /// 前缀补全；前缀路径不存在时返回 None。
    fn proposed_words(&self, prefix: &str) -> Option<Vec<&WordEntry>>;
}
