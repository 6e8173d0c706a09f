use crate::common::TestResult;
use crate::common::command::{
    committed_repository_dir, init_repository_dir, read_index, repository_dir,
    run_microgit_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::Path;

mod common;

#[rstest]
fn add_stages_files_from_nested_directories(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        dir.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_microgit_command(dir, &["add", "."])
        .assert()
        .success()
        .stdout(
            "Added 1.txt to the staging area\n\
             Added a/2.txt to the staging area\n\
             Added a/b/3.txt to the staging area\n",
        );

    let index = read_index(dir)?;
    let staged = index
        .as_object()
        .ok_or("index is not a JSON object")?
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(staged, vec!["1.txt", "a/2.txt", "a/b/3.txt"]);

    Ok(())
}

#[rstest]
fn add_records_content_digests(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 3);
    let names = files
        .iter()
        .map(|file| {
            file.path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or("generated file has no name")
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut args = vec!["add"];
    args.extend(names.iter().map(String::as_str));

    run_microgit_command(dir, &args).assert().success();

    let index = read_index(dir)?;
    assert_eq!(index.as_object().map(|entries| entries.len()), Some(3));
    for name in &names {
        assert_eq!(index[name.as_str()], serde_json::json!(stdout_of_hash(dir, name)));
    }

    Ok(())
}

fn stdout_of_hash(dir: &Path, name: &str) -> String {
    stdout_of(run_microgit_command(dir, &["hash-object", name]))
        .trim()
        .to_string()
}

#[rstest]
fn adding_a_missing_file_is_silently_ignored(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("real.txt"), "real".to_string()));

    run_microgit_command(dir, &["add", "ghost.txt", "real.txt"])
        .assert()
        .success()
        .stdout("Added real.txt to the staging area\n")
        .stderr(predicate::str::is_empty());

    assert_eq!(
        read_index(dir)?,
        serde_json::json!({ "real.txt": stdout_of_hash(dir, "real.txt") })
    );

    Ok(())
}

#[rstest]
fn paths_outside_the_working_tree_are_dropped(repository_dir: TempDir) -> TestResult {
    let root = repository_dir.path();
    let dir = root.join("repo");
    run_microgit_command(root, &["init", "repo"]).assert().success();
    write_file(FileSpec::new(root.join("outside.txt"), "outside".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    std::fs::create_dir_all(dir.join("sub"))?;

    run_microgit_command(&dir, &["add", "../outside.txt", "sub/../a.txt", "a.txt"])
        .assert()
        .success()
        .stdout("Added a.txt to the staging area\n");

    assert_eq!(
        read_index(&dir)?,
        serde_json::json!({ "a.txt": stdout_of_hash(&dir, "a.txt") })
    );

    Ok(())
}

#[rstest]
fn ignored_files_are_not_staged(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join(".microgitignore"),
        "*.log\nbuild/\n".to_string(),
    ));
    write_file(FileSpec::new(dir.join("keep.txt"), "keep".to_string()));
    write_file(FileSpec::new(dir.join("debug.log"), "noise".to_string()));
    write_file(FileSpec::new(
        dir.join("build").join("out.bin"),
        "binary".to_string(),
    ));

    run_microgit_command(dir, &["add", "."])
        .assert()
        .success()
        .stdout("Added keep.txt to the staging area\n");

    Ok(())
}

#[rstest]
fn content_already_in_history_is_skipped(committed_repository_dir: TempDir) -> TestResult {
    let dir = committed_repository_dir.path();
    // same bytes as the committed 1.txt, under a new name
    write_file(FileSpec::new(dir.join("copy.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("fresh.txt"), "fresh".to_string()));

    run_microgit_command(dir, &["add", "copy.txt", "fresh.txt"])
        .assert()
        .success()
        .stdout(
            "Skipped copy.txt: already committed\n\
             Added fresh.txt to the staging area\n",
        );

    let index = read_index(dir)?;
    assert!(index.get("copy.txt").is_none());
    assert!(index.get("fresh.txt").is_some());

    Ok(())
}

#[rstest]
fn reset_unstages_only_named_files(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "b".to_string()));
    run_microgit_command(dir, &["add", "a.txt", "b.txt"])
        .assert()
        .success();

    run_microgit_command(dir, &["reset", "a.txt", "never-staged.txt"])
        .assert()
        .success()
        .stdout("Unstaged a.txt\n");

    let index = read_index(dir)?;
    assert!(index.get("a.txt").is_none());
    assert!(index.get("b.txt").is_some());
    assert!(dir.join("a.txt").is_file());

    Ok(())
}
