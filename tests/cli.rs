use rstest::rstest;
use std::path::Path;
use std::process::{Command, Output};

fn keysplits(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keysplits"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn writes_splits_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = keysplits(dir.path(), &["8"]);
    assert!(out.status.success(), "{:?}", out);

    let text = std::fs::read_to_string(dir.path().join("splits")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "1fffffffffffffff");
    assert_eq!(lines[3], "7fffffffffffffff");
    assert_eq!(lines[6], "dfffffffffffffff");
}

#[test]
fn stdout_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = keysplits(dir.path(), &["-o", "-", "2"]);
    assert!(out.status.success(), "{:?}", out);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "7fffffffffffffff\n");
    assert!(!dir.path().join("splits").exists());
}

#[test]
fn named_output_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = keysplits(dir.path(), &["--summary", "--output", "ci.splits", "1000"]);
    assert!(out.status.success(), "{:?}", out);

    let text = std::fs::read_to_string(dir.path().join("ci.splits")).unwrap();
    assert_eq!(text.lines().count(), 999);
    assert!(text.lines().all(|l| l.len() == 16));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("wrote splits"), "{}", stderr);
    assert!(stderr.contains("remainder=615"), "{}", stderr);
}

#[rstest]
#[case(&[])]
#[case(&["0"])]
#[case(&["1"])]
#[case(&["1000000"])]
#[case(&["abc"])]
#[case(&["12x"])]
fn rejects_bad_counts(#[case] args: &[&str]) {
    let dir = tempfile::tempdir().unwrap();
    let out = keysplits(dir.path(), args);
    assert!(!out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains("must be an integer greater than 1 and less than 1,000,000"),
        "{}",
        stderr
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
