use std::fs;
use std::process::{Command, Output};

fn ipart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipart"))
        .args(args)
        .env_remove("IPART_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn ordered_three_lists_compositions() {
    let out = ipart(&["o", "3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "3\n2,1\n1,2\n1,1,1\n");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Ordered partitions of 3:"));
}

#[test]
fn mode_defaults_to_ordered() {
    let out = ipart(&["5"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    // 2^4 compositions of 5
    assert_eq!(text.lines().count(), 16);
    assert_eq!(text.lines().next(), Some("5"));
    assert_eq!(text, stdout(&ipart(&["o", "5"])));
}

#[test]
fn invalid_input_exits_with_usage_code() {
    let cases: [&[&str]; 5] = [
        &["o", "-1"],
        &["x", "3"],
        &["f", "4"],
        &["o", "4", "2"],
        &["u", "four"],
    ];
    for args in cases {
        let out = ipart(args);
        assert_eq!(out.status.code(), Some(2), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
    }
}

#[test]
fn exceeded_budget_is_a_runtime_failure() {
    let out = ipart(&["--max-partitions", "1", "o", "5"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn count_limit_and_separator() {
    assert_eq!(stdout(&ipart(&["--count", "o", "4"])), "8\n");
    assert_eq!(stdout(&ipart(&["--count", "u", "10"])), "42\n");
    assert_eq!(stdout(&ipart(&["--limit", "2", "u", "5"])), "5\n4,1\n");
    assert_eq!(stdout(&ipart(&["--sep", " ", "f", "2", "2", "--ordered"])), "2 0\n1 1\n0 2\n");
}

#[test]
fn json_report() {
    let out = ipart(&["--format", "json", "u", "3"]);
    assert_eq!(out.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["count"], 3);
    assert_eq!(v["partitions"], serde_json::json!([[3], [2, 1], [1, 1, 1]]));
}

#[test]
fn fixed_length_much_longer_than_the_number() {
    let out = ipart(&["f", "2", "100000"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2,0,0,"));
    assert!(lines[1].starts_with("1,1,0,"));
    assert_eq!(lines[1].split(',').count(), 100_000);
}

#[test]
fn export_files_next_to_each_other() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path().to_str().unwrap();
    let out = ipart(&["u", "4", "--form-dir", d, "--txt-dir", d, "--csv-dir", d]);
    assert_eq!(out.status.code(), Some(0));

    let hf = fs::read_to_string(dir.path().join("4u.hf")).unwrap();
    assert_eq!(hf.lines().nth(1), Some("   + ipart(4)"));
    let txt = fs::read_to_string(dir.path().join("4u.txt")).unwrap();
    assert_eq!(txt, "4\n3 1\n2 2\n2 1 1\n1 1 1 1\n");
    let csv = fs::read_to_string(dir.path().join("4u.csv")).unwrap();
    assert_eq!(csv, "4\n3,1\n2,2\n2,1,1\n1,1,1,1\n");
}
