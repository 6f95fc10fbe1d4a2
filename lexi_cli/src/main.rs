use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use lexi_core::{dictionary::Dictionary, model::WordEntry};
use lexi_dict::TextDictionary;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[clap(name = "lexi_cli", about = "Interactive dictionary shell")]
struct Args {
    /// 启动时导入的词典文件（`word<TAB>meaning` 每行一条）
    #[clap(short = 'd', long)]
    dict: Option<PathBuf>,

    /// 导入时跳过缺少 TAB 的行，而不是直接报错
    #[clap(long)]
    skip_malformed: bool,

    /// `export` 不带参数时的默认输出文件
    #[clap(short = 'o', long, default_value = "output.txt")]
    export: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lexi_core=info,lexi_dict=info,lexi_cli=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut dict = TextDictionary::new().skip_malformed(args.skip_malformed);
    if let Some(path) = &args.dict {
        let report = dict.import_path(path)?;
        if report.rejected_words > 0 || report.skipped_malformed > 0 {
            tracing::warn!(
                rejected = report.rejected_words,
                skipped = report.skipped_malformed,
                "some lines were not imported"
            );
        }
    }

    let stdin = io::stdin();
    repl(&mut dict, &args, &mut stdin.lock(), &mut io::stdout())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "命令：\n  \
         add <word>       添加单词（随后输入释义；已存在则追加）\n  \
         remove <word>    删除单词\n  \
         edit <word>      修改释义（随后输入新释义）\n  \
         show             列出全部单词\n  \
         lookup <word>    查询单词\n  \
         search <prefix>  前缀搜索\n  \
         import <path>    从文件导入\n  \
         export [path]    导出到文件\n  \
         compact          回收删除后留下的空节点\n  \
         :q               退出"
    )
}

fn repl(
    dict: &mut TextDictionary,
    args: &Args,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "lexi dictionary shell | {} words", dict.len())?;
    writeln!(out, "输入 help 查看命令，:q 退出。")?;

    let mut line = String::new();
    loop {
        write!(out, "dict> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };
        match command {
            "" => continue,
            ":q" | ":quit" | ":exit" => break,
            "help" => print_help(out)?,
            "add" | "edit" if rest.is_empty() => writeln!(out, "用法：{command} <word>")?,
            "add" => {
                let meaning = prompt(input, out, "meaning> ")?;
                match dict.add_word(rest, &meaning) {
                    Ok(()) => writeln!(out, "已添加：{rest}")?,
                    Err(err) => writeln!(out, "添加失败：{err}")?,
                }
            }
            "edit" => {
                let meaning = prompt(input, out, "new meaning> ")?;
                if dict.edit_word(rest, &meaning) {
                    writeln!(out, "已更新：{rest}")?;
                } else {
                    writeln!(out, "更新失败：{rest}")?;
                }
            }
            "remove" => {
                if dict.delete_word(rest) {
                    writeln!(out, "已删除：{rest}")?;
                } else {
                    writeln!(out, "没有可删除的单词：{rest}")?;
                }
            }
            "show" => display_entries(out, &dict.query_all_words())?,
            "lookup" => match dict.lookup_word(rest) {
                Some(entry) => writeln!(out, "{}", entry.meaning())?,
                None => writeln!(out, "未找到。")?,
            },
            "search" => match dict.proposed_words(rest) {
                Some(entries) if !entries.is_empty() => {
                    for entry in entries {
                        writeln!(out, "- {}", entry.target())?;
                    }
                }
                _ => writeln!(out, "未找到。")?,
            },
            "import" if rest.is_empty() => writeln!(out, "用法：import <path>")?,
            "import" => match dict.import_path(rest) {
                Ok(report) => writeln!(
                    out,
                    "导入 {} 行（跳过 {}，非法单词 {}）",
                    report.imported, report.skipped_malformed, report.rejected_words
                )?,
                Err(err) => writeln!(out, "导入失败：{err}")?,
            },
            "export" => {
                let path = if rest.is_empty() {
                    args.export.clone()
                } else {
                    PathBuf::from(rest)
                };
                match dict.export_path(&path) {
                    Ok(count) => writeln!(out, "已导出 {count} 个单词到 {}", path.display())?,
                    Err(err) => writeln!(out, "导出失败：{err}")?,
                }
            }
            "compact" => writeln!(out, "释放 {} 个节点", dict.compact())?,
            _ => writeln!(out, "无效命令：{command}（输入 help 查看命令）")?,
        }
    }
    Ok(())
}

/// 读一行作为释义；EOF 时返回空串。
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 表格输出：每条释义占一行，同一单词的后续释义不再重复序号和单词。
fn display_entries(out: &mut impl Write, entries: &[&WordEntry]) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|e| e.target().chars().count())
        .max()
        .unwrap_or(0)
        .max("English".len());
    writeln!(out, "{:<8}| {:<width$} | Vietnamese", "No", "English")?;
    for (i, entry) in entries.iter().enumerate() {
        for (j, sense) in entry.senses().enumerate() {
            if j == 0 {
                writeln!(out, "{:<8}| {:<width$} | {sense}", i + 1, entry.target())?;
            } else {
                writeln!(out, "{:<8}| {:<width$} | {sense}", "", "")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
