//! `lexi_dict`：基于文本文件的词典（导入/导出 + 持有 trie 的上下文对象）。
//!
//! 文件格式见 [`codec`]。调用方（CLI/GUI/小游戏）各自持有一个 `TextDictionary`，
//! 通过 `lexi_core::dictionary::Dictionary` 接口访问。
use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use lexi_core::{dictionary::Dictionary, error::TrieError, model::WordEntry, trie::Trie};

pub mod codec;
pub mod error;

pub use error::{Result, TextError};

/// 一次导入的统计结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// 成功写入 trie 的行数（同一单词的多行各算一次）
    pub imported: usize,
    /// 因缺少分隔符被跳过的行数（仅 `skip_malformed` 时非零）
    pub skipped_malformed: usize,
    /// 单词含非法字符、被 trie 拒绝的行数
    pub rejected_words: usize,
}

/// 导入选项。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// 缺少分隔符的行：true 跳过并计数，false（默认）立即失败
    skip_malformed: bool,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置格式错误行的处理策略。
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }
}

/// 逐行读入并调用 `add_word`；重复单词按 insert 的规则合并释义。
///
/// - 空行直接忽略；只含空白的行照常解析（空格是合法字符）
/// - 缺少分隔符：`skip_malformed` 时计数后继续，否则立即返回 `MalformedLine`
///   （此前已读入的行保留在词典中）
/// - 单词含非法字符：记入 `rejected_words`，不会中断导入
pub fn import_words<D, R>(dict: &mut D, reader: R, options: ImportOptions) -> Result<ImportReport>
where
    D: Dictionary + ?Sized,
    R: BufRead,
{
    let mut report = ImportReport::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        // 编码结果总带 TAB，空行不可能来自 export
        if line.is_empty() {
            continue;
        }
        let (target, meaning) = match codec::decode_line(&line) {
            Ok(decoded) => decoded,
            Err(_) if options.skip_malformed => {
                tracing::warn!(line = idx + 1, "skipping malformed line");
                report.skipped_malformed += 1;
                continue;
            }
            Err(_) => {
                return Err(TextError::MalformedLine {
                    line: idx + 1,
                    content: line.clone(),
                });
            }
        };
        match dict.add_word(target, &meaning) {
            Ok(()) => report.imported += 1,
            Err(_) => report.rejected_words += 1,
        }
    }
    tracing::debug!(
        imported = report.imported,
        skipped = report.skipped_malformed,
        rejected = report.rejected_words,
        "import finished"
    );
    Ok(report)
}

/// 按 `query_all_words` 的顺序逐条编码写出，返回写出的词条数。
pub fn export_words<D, W>(dict: &D, mut writer: W) -> Result<usize>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    let entries = dict.query_all_words();
    for entry in &entries {
        writer.write_all(codec::encode_entry(entry).as_bytes())?;
    }
    writer.flush()?;
    tracing::debug!(count = entries.len(), "export finished");
    Ok(entries.len())
}

/// 文本词典：持有一棵 trie，并负责与文件之间的导入/导出。
#[derive(Debug, Default)]
pub struct TextDictionary {
    trie: Trie,
    options: ImportOptions,
}

impl TextDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ImportOptions) -> Self {
        Self {
            trie: Trie::new(),
            options,
        }
    }

    /// 设置格式错误行的处理策略（等价于修改 `ImportOptions`）。
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.options = self.options.skip_malformed(skip);
        self
    }

    /// 新建词典并从文件导入（默认选项：遇到格式错误行立即失败）。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load(path)
    }

    /// 构建后导入文件，沿用已设置的选项：
    /// `TextDictionary::new().skip_malformed(true).load(path)`。
    pub fn load(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.import_path(path)?;
        Ok(self)
    }

    pub fn options(&self) -> ImportOptions {
        self.options
    }

    pub fn import_from<R: BufRead>(&mut self, reader: R) -> Result<ImportReport> {
        import_words(&mut self.trie, reader, self.options)
    }

    pub fn import_path(&mut self, path: impl AsRef<Path>) -> Result<ImportReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let report = self.import_from(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            imported = report.imported,
            "imported dictionary"
        );
        Ok(report)
    }

    pub fn export_to<W: Write>(&self, writer: W) -> Result<usize> {
        export_words(&self.trie, writer)
    }

    /// 导出到文件：先写 `<文件名>.tmp` 再 rename，避免留下写了一半的文件。
    /// 写入失败时删除临时文件。
    pub fn export_path(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp_path = temp_path_for(path);
        let result = self.write_file(&temp_path).and_then(|count| {
            fs::rename(&temp_path, path)?;
            Ok(count)
        });
        let count = match result {
            Ok(count) => count,
            Err(err) => {
                let _ = fs::remove_file(&temp_path);
                return Err(err);
            }
        };
        tracing::info!(path = %path.display(), count, "exported dictionary");
        Ok(count)
    }

    fn write_file(&self, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let count = self.export_to(&mut writer)?;
        writer.get_ref().sync_all()?;
        Ok(count)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// 回收 delete 留下的空分支。
    pub fn compact(&mut self) -> usize {
        self.trie.compact()
    }
}

/// 在目标文件名后追加 `.tmp`（`words.txt` -> `words.txt.tmp`），
/// 不会与同目录下的其他文件或目标本身重名。
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl Dictionary for TextDictionary {
    fn lookup_word(&self, word: &str) -> Option<&WordEntry> {
        self.trie.lookup(word)
    }

    fn add_word(&mut self, word: &str, meaning: &str) -> std::result::Result<(), TrieError> {
        self.trie.insert(word, meaning)
    }

    fn delete_word(&mut self, word: &str) -> bool {
        self.trie.delete(word)
    }

    fn edit_word(&mut self, word: &str, meaning: &str) -> bool {
        self.trie.edit(word, meaning)
    }

    fn query_all_words(&self) -> Vec<&WordEntry> {
        self.trie.query_all()
    }

    fn proposed_words(&self, prefix: &str) -> Option<Vec<&WordEntry>> {
        self.trie.prefix_query(prefix)
    }
}
