// Tests for the dictionary shell
// - a scripted session: add (merge), lookup, search, edit, remove, show
// - export writes the default file, import reads it back
// - argument parsing defaults

use super::*;
use std::io::Cursor;
use tempfile::TempDir;

fn run(dict: &mut TextDictionary, args: &Args, script: &str) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut out = Vec::new();
    repl(dict, args, &mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn args_with_export(path: PathBuf) -> Args {
    Args {
        dict: None,
        skip_malformed: false,
        export: path,
    }
}

#[test]
fn test_scripted_session() {
    let temp_dir = TempDir::new().unwrap();
    let args = args_with_export(temp_dir.path().join("output.txt"));
    let mut dict = TextDictionary::new();

    let output = run(
        &mut dict,
        &args,
        "add cat\nfeline\nadd Cat\nanimal\nlookup cat\nsearch ca\nsearch zz\n\
         edit dog\na pet\nremove cat\nremove cat\nshow\nbogus\n:q\nadd never\n",
    );

    assert!(output.contains("已添加：cat"));
    assert!(output.contains("feline\nanimal\n"));
    assert!(output.contains("- cat\n"));
    assert!(output.contains("已更新：dog"));
    assert!(output.contains("已删除：cat"));
    assert!(output.contains("没有可删除的单词：cat"));
    assert!(output.contains("无效命令：bogus"));
    assert!(output.contains("dog"));

    // :q 之后的命令不再执行
    assert!(dict.lookup_word("never").is_none());
    assert!(dict.lookup_word("cat").is_none());
    assert_eq!(dict.lookup_word("dog").unwrap().meaning(), "a pet");
}

#[test]
fn test_rejects_invalid_word() {
    let temp_dir = TempDir::new().unwrap();
    let args = args_with_export(temp_dir.path().join("output.txt"));
    let mut dict = TextDictionary::new();
    let output = run(&mut dict, &args, "add ca7\nx\n");
    assert!(output.contains("添加失败"));
    assert!(dict.is_empty());
}

#[test]
fn test_export_then_import() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("output.txt");
    let args = args_with_export(export_path.clone());

    let mut dict = TextDictionary::new();
    let output = run(&mut dict, &args, "add apple\na round fruit\nadd apple\nred or green\nexport\n");
    assert!(output.contains("已导出 1 个单词"));
    assert_eq!(
        std::fs::read_to_string(&export_path).unwrap(),
        "apple\ta round fruit\\red or green\n"
    );

    let mut fresh = TextDictionary::new();
    let script = format!("import {}\n", export_path.display());
    let output = run(&mut fresh, &args, &script);
    assert!(output.contains("导入 1 行"));
    assert_eq!(
        fresh.lookup_word("apple").unwrap().meaning(),
        "a round fruit\nred or green"
    );
}

#[test]
fn test_show_lists_one_row_per_sense() {
    let mut dict = TextDictionary::new();
    dict.add_word("cat", "feline").unwrap();
    dict.add_word("cat", "animal").unwrap();
    let mut out = Vec::new();
    display_entries(&mut out, &dict.query_all_words()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1       | cat"));
    assert!(lines[1].ends_with("| feline"));
    assert!(lines[2].ends_with("| animal"));
}

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["lexi_cli"]).unwrap();
    assert!(args.dict.is_none());
    assert!(!args.skip_malformed);
    assert_eq!(args.export, PathBuf::from("output.txt"));

    let args = Args::try_parse_from(["lexi_cli", "--dict", "words.txt", "--skip-malformed"]).unwrap();
    assert_eq!(args.dict, Some(PathBuf::from("words.txt")));
    assert!(args.skip_malformed);
}
