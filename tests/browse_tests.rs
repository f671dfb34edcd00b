//! Integration tests for browse and show commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{nlarchive_cmd, write_archive};

#[test]
fn test_browse_all_lists_loaded_articles() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .arg("browse")
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("全記事一覧 (7件)"))
        .stdout(predicate::str::contains("4月1日 (火)  [日大一の6年間]"))
        .stdout(predicate::str::contains("4月6日 (日)\n"))
        .stdout(predicate::str::contains("タイトルのない行").not());
}

#[test]
fn test_default_command_is_browse() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .env("NLARCHIVE_DATA", &data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("全記事一覧 (7件)"));
}

#[test]
fn test_browse_shows_guide_preview() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("  ◆ 木のテーマ：学校行事\n"))
        .stdout(predicate::str::contains("    明日は文化祭です。\n    楽しみです。\n"));
}

#[test]
fn test_browse_full_prints_article_bodies() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--theme", "火", "--full", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("    それではまた明日。"))
        .stdout(predicate::str::contains("    ━━━━━━━━━━━━━━━━━━━━"));
}

#[test]
fn test_browse_without_full_omits_bodies() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--theme", "火", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("それではまた明日").not())
        .stdout(predicate::str::contains("━━━━").not());
}

#[test]
fn test_browse_by_theme_name() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--theme", "学校行事", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("学校行事 の記事 (1件)"))
        .stdout(predicate::str::contains("文化祭のお知らせ"))
        .stdout(predicate::str::contains("入試説明会").not());
}

#[test]
fn test_browse_by_weekday_key() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--theme", "金", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("日大一の入試 の記事 (1件)"));
}

#[test]
fn test_browse_invalid_theme() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--theme", "日", "--data"])
        .arg(&data)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid theme: '日'"));
}

#[test]
fn test_missing_data_file_degrades_to_empty_view() {
    let temp = TempDir::new().unwrap();

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["browse", "--data", "missing.csv"])
        .assert()
        .code(2)
        .stdout("表示できる記事がありません。\n")
        .stderr(predicate::str::contains("データが読み込めませんでした"))
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn test_show_full_article() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["show", "4", "3", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("4月3日 (木)\n文化祭のお知らせ\n"))
        .stdout(predicate::str::contains("テーマ: 学校行事"))
        .stdout(predicate::str::contains("学校案内: 木のテーマ：学校行事 (学校行事)"))
        .stdout(predicate::str::contains("━━━━━━━━━━━━━━━━━━━━"))
        .stdout(predicate::str::contains("明日は文化祭です。\n楽しみです。"));
}

#[test]
fn test_show_missing_date() {
    let temp = TempDir::new().unwrap();
    let data = write_archive(temp.path());

    nlarchive_cmd()
        .current_dir(temp.path())
        .args(["show", "5", "1", "--data"])
        .arg(&data)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No article found for 5月1日"));
}
