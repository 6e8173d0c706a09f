use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Fresh repository with nothing committed
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_microgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository whose master branch holds a single commit with `1.txt`,
/// `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        dir.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_microgit_command(dir, &["add", "."]).assert().success();
    microgit_commit(dir, "Initial commit").assert().success();

    init_repository_dir
}

pub fn run_microgit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("microgit").expect("Failed to find microgit binary");
    cmd.envs(vec![
        ("MICROGIT_AUTHOR_NAME", AUTHOR_NAME),
        ("MICROGIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("MICROGIT_AUTHOR_DATE", AUTHOR_DATE),
        ("MICROGIT_LOG", "off"),
    ]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn microgit_commit(dir: &Path, message: &str) -> Command {
    run_microgit_command(dir, &["commit", "-m", message])
}

/// Write `content` to `name`, stage it and commit it
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    run_microgit_command(dir, &["add", name]).assert().success();
    microgit_commit(dir, message).assert().success();
}

pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not valid UTF-8")
}

/// Resolve HEAD to a commit digest by reading the metadata files directly
pub fn head_commit_id(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".microgit").join("HEAD"))?;

    // HEAD holds either a digest or a ref like "ref: refs/heads/master"
    if let Some(ref_path) = head_content.trim().strip_prefix("ref: ") {
        let ref_file = dir.join(".microgit").join(ref_path.trim());
        Ok(std::fs::read_to_string(ref_file)?.trim().to_string())
    } else {
        Ok(head_content.trim().to_string())
    }
}

pub fn branch_tip(dir: &Path, branch: &str) -> Result<String, Box<dyn std::error::Error>> {
    let ref_file = dir
        .join(".microgit")
        .join("refs")
        .join("heads")
        .join(branch);
    Ok(std::fs::read_to_string(ref_file)?.trim().to_string())
}

/// Load a commit through `cat-file` and parse its JSON record
pub fn cat_commit(
    dir: &Path,
    commit_id: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let output = stdout_of(run_microgit_command(dir, &["cat-file", commit_id]));
    Ok(serde_json::from_str(&output)?)
}

pub fn read_index(dir: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".microgit").join("index"))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn count_objects(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir.join(".microgit").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
