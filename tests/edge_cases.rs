//! Edge case and error handling tests for dump


use assert_cmd::Command;
use harness::{TestTree, dumped_count, run_dump};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn dump_cmd(tree: &TestTree) -> Command {
    let mut cmd = Command::cargo_bin("dump").expect("binary builds");
    cmd.current_dir(tree.path())
        .env("HOME", tree.path())
        .env("XDG_CONFIG_HOME", tree.path().join(".config"))
        .env_remove("DUMP_LOG");
    cmd
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn test_no_paths_exits_with_error() {
    let tree = TestTree::new();
    dump_cmd(&tree)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no file or directory paths specified"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_both_ignore_flags_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "content");

    dump_cmd(&tree)
        .args(["--ignore", "*.log", "-i", "*.tmp", "a.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_flag_is_an_error() {
    let tree = TestTree::new();
    dump_cmd(&tree)
        .args(["--bogus", "a.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_version_needs_no_paths() {
    let tree = TestTree::new();
    dump_cmd(&tree)
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dump version: "));
}

// ============================================================================
// Per-path Errors
// ============================================================================

#[test]
fn test_missing_path_is_not_fatal() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "REAL");

    let (stdout, stderr, success) = run_dump(tree.path(), &["missing.txt", "real.txt"]);
    assert!(success, "per-path errors do not change exit status");
    assert!(stderr.contains("cannot access 'missing.txt'"), "{}", stderr);
    assert!(stdout.contains("REAL"));
    assert_eq!(dumped_count(&stdout), 1);
}

#[test]
fn test_glob_without_matches_warns() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "REAL");

    let (stdout, stderr, success) = run_dump(tree.path(), &["*.nothing", "real.txt"]);
    assert!(success);
    assert!(
        stderr.contains("warning: no files matched the pattern '*.nothing'"),
        "{}",
        stderr
    );
    assert_eq!(dumped_count(&stdout), 1);
}

#[test]
fn test_unreadable_file_is_skipped() {
    let tree = TestTree::new();
    let secret = tree.add_file("a_secret.txt", "SECRET");
    tree.add_file("b_public.txt", "PUBLIC");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    // Running as root bypasses permissions; nothing to check then
    let readable = fs::read(&secret).is_ok();

    let (stdout, stderr, success) = run_dump(tree.path(), &["."]);
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(success);
    assert!(stdout.contains("PUBLIC"));
    if !readable {
        assert!(!stdout.contains("SECRET"));
        assert!(stderr.contains("cannot read 'a_secret.txt'"), "{}", stderr);
    }
}

#[test]
fn test_unreadable_directory_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("locked/inner.txt", "INNER");
    tree.add_file("z_after.txt", "AFTER");
    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&locked).is_ok();

    let (stdout, stderr, success) = run_dump(tree.path(), &["."]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success);
    assert!(stdout.contains("AFTER"), "siblings continue");
    if !readable {
        assert!(stderr.contains("cannot read directory 'locked'"), "{}", stderr);
    }
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let tree = TestTree::new();
    tree.add_file(".dump.toml", "file_start = [");
    tree.add_file("a.txt", "content");

    let (stdout, stderr, success) = run_dump(tree.path(), &["a.txt"]);
    assert!(success);
    assert!(stderr.contains("warning: invalid config file"), "{}", stderr);
    assert!(stdout.starts_with("--- FILE-START: a.txt ---\n"));
}

#[test]
fn test_bad_template_falls_back_per_field() {
    let tree = TestTree::new();
    tree.add_file(
        ".dump.toml",
        "file_start = \"{{.Unknown}}\"\nfile_end = \"DONE\"\n",
    );
    tree.add_file("a.txt", "content");

    let (stdout, stderr, success) = run_dump(tree.path(), &["a.txt"]);
    assert!(success);
    assert!(stderr.contains("invalid template for 'file_start'"), "{}", stderr);
    assert!(stdout.starts_with("--- FILE-START: a.txt ---\n"));
    assert!(stdout.contains("\nDONE\n"));
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_is_dumped() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "TARGET");
    symlink(tree.path().join("target.txt"), tree.path().join("link.txt")).unwrap();

    let (stdout, _stderr, success) = run_dump(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("--- FILE-START: link.txt ---"));
    assert_eq!(stdout.matches("TARGET").count(), 2);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "FILE");
    symlink("..", tree.path().join("subdir").join("parent")).unwrap();

    let (stdout, _stderr, success) = run_dump(tree.path(), &["."]);
    assert!(success, "dump should not hang on parent symlink");
    assert_eq!(stdout.matches("FILE-START").count(), 1);
}

#[test]
fn test_broken_symlink_reported() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "REAL");
    symlink("nonexistent.txt", tree.path().join("broken_link.txt")).unwrap();

    let (stdout, stderr, success) = run_dump(tree.path(), &["."]);
    assert!(success, "dump should handle broken symlinks");
    assert!(stdout.contains("REAL"));
    assert!(stderr.contains("broken_link.txt"), "{}", stderr);
}

#[test]
fn test_explicit_symlinked_directory_is_walked() {
    let tree = TestTree::new();
    tree.add_file("real/inner.txt", "INNER");
    symlink(tree.path().join("real"), tree.path().join("alias")).unwrap();

    let (stdout, _stderr, success) = run_dump(tree.path(), &["alias"]);
    assert!(success);
    assert!(stdout.contains("--- FILE-START: alias/inner.txt ---"));
}

// ============================================================================
// Content Edge Cases
// ============================================================================

#[test]
fn test_empty_file() {
    let tree = TestTree::new();
    tree.add_file("empty.txt", "");

    let (stdout, _stderr, success) = run_dump(tree.path(), &["empty.txt"]);
    assert!(success);
    assert_eq!(
        stdout,
        "--- FILE-START: empty.txt ---\n``` txt\n```\n--- FILE-END ---\n\n"
    );
}

#[test]
fn test_non_utf8_content_passed_through() {
    let tree = TestTree::new();
    fs::write(tree.path().join("blob.bin"), [0xFF, 0xFE, b'\n']).unwrap();

    dump_cmd(&tree)
        .arg("blob.bin")
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| {
            out.windows(3).any(|w| w == [0xFF, 0xFE, b'\n'])
        }));
}

#[test]
fn test_file_with_unicode_name() {
    let tree = TestTree::new();
    tree.add_file("日本語.md", "# 見出し");

    let (stdout, _stderr, success) = run_dump(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("--- FILE-START: 日本語.md ---\n``` md\n# 見出し\n"));
}

#[test]
fn test_dotfile_extension_when_hidden_included() {
    let tree = TestTree::new();
    tree.add_file(".bashrc", "alias ll='ls -l'");

    let (stdout, _stderr, success) = run_dump(tree.path(), &["-H", ".bashrc"]);
    assert!(success);
    assert!(stdout.contains("``` bashrc\n"));
}

#[test]
fn test_explicit_hidden_file_skipped_without_flag() {
    let tree = TestTree::new();
    tree.add_file(".bashrc", "alias ll='ls -l'");

    let (stdout, stderr, success) = run_dump(tree.path(), &[".bashrc"]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty(), "ignored paths are skipped silently: {}", stderr);
}

#[test]
fn test_ignore_pattern_can_prune_whole_input() {
    let tree = TestTree::new();
    tree.add_file("build/out.txt", "OUT");

    let (stdout, _stderr, success) = run_dump(tree.path(), &["--ignore", "build/", "build"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_empty_directory_produces_no_output() {
    let tree = TestTree::new();
    tree.add_dir("empty/inner");

    let (stdout, stderr, success) = run_dump(tree.path(), &["empty"]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}
