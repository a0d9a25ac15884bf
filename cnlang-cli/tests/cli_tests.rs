//! CLI 端到端测试
//!
//! 启动 `cnlang` 二进制，检查标准输出与退出码

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// 使用不存在的配置文件（即默认配置）运行 cnlang
fn run_cnlang(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cnlang"))
        .args(["--config", "does-not-exist/cnlang.json"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cnlang");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for cnlang")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_demo_stdout() {
    let output = run_cnlang(&["demo"], "");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "30.000000\n\
         Hello, World!\n\
         null\n\
         null\n\
         x 大于 5\n\
         null\n\
         null\n\
         null\n\
         6.000000\n"
    );
}

#[test]
fn test_lines_reads_piped_stdin() {
    let output = run_cnlang(&["lines"], "张三\r\nsecond\nlast");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "[张三, second, last]\n3.000000\n");
}

#[test]
fn test_lines_with_empty_stdin() {
    let output = run_cnlang(&["lines"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "[]\n0.000000\n");
}

#[test]
fn test_eval_binary_and_unary() {
    let sum = run_cnlang(&["eval", "10", "+", "20"], "");
    assert!(sum.status.success());
    assert_eq!(stdout_of(&sum), "30.000000\n");

    let neg = run_cnlang(&["eval", "-", "-4"], "");
    assert_eq!(stdout_of(&neg), "4.000000\n");

    let div = run_cnlang(&["eval", "1", "/", "0"], "");
    assert_eq!(stdout_of(&div), "null\n");
}

#[test]
fn test_unknown_operator_exits_with_error() {
    let output = run_cnlang(&["eval", "1", "%", "2"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains('%'));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let path = std::env::temp_dir().join(format!("cnlang-cli-{}-bad.json", std::process::id()));
    std::fs::write(&path, "{ not json").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_cnlang"))
        .arg("--config")
        .arg(&path)
        .arg("demo")
        .output()
        .expect("run cnlang");
    std::fs::remove_file(&path).expect("remove config");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
