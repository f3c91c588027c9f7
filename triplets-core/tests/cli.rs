// Tests for the `triplets` binary: arguments, exit codes and stdout.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn triplets(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_triplets"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn triplets")
}

fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("triplets-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create fixture dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_top_three() {
    let path = fixture("cat.txt", "the cat sat the cat sat the cat ran\n");
    let out = triplets(&[path.to_str().expect("utf-8 path")]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "the cat sat - 2\ncat sat the - 2\nsat the cat - 2\n"
    );
}

#[test]
fn prints_fewer_lines_when_fewer_trigrams() {
    let path = fixture("four.txt", "alpha, beta; gamma. delta");
    let out = triplets(&[path.to_str().expect("utf-8 path")]);

    assert!(out.status.success());
    assert_eq!(stdout(&out), "alpha beta gamma - 1\nbeta gamma delta - 1\n");
}

#[test]
fn no_argument_is_usage_error() {
    let out = triplets(&[]);

    assert_eq!(out.status.code(), Some(64));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Input file expected"));
}

#[test]
fn missing_file_is_access_error() {
    let out = triplets(&["/definitely/not/here.txt"]);

    assert_eq!(out.status.code(), Some(66));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("/definitely/not/here.txt"));
}

#[test]
fn too_few_words_is_data_error() {
    let path = fixture("short.txt", "just two");
    let out = triplets(&[path.to_str().expect("utf-8 path")]);

    assert_eq!(out.status.code(), Some(65));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Too few words"));
}

#[test]
fn empty_file_is_data_error() {
    let path = fixture("empty.txt", "");
    let out = triplets(&[path.to_str().expect("utf-8 path")]);

    assert_eq!(out.status.code(), Some(65));
    assert!(stdout(&out).is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let path = fixture(
        "stable.txt",
        "one fish two fish red fish blue fish one fish two fish",
    );
    let arg = path.to_str().expect("utf-8 path");

    let first = triplets(&[arg]);
    let second = triplets(&[arg]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
