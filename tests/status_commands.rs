use crate::common::TestResult;
use crate::common::command::{
    committed_repository_dir, init_repository_dir, microgit_commit, run_microgit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

mod common;

#[rstest]
fn clean_working_tree(committed_repository_dir: TempDir) {
    run_microgit_command(committed_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("On branch master\nnothing to commit, working tree clean\n");
}

#[rstest]
fn new_files_are_untracked_in_name_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for name in ["file.txt", "another.txt", "dir/nested.txt"] {
        write_file(FileSpec::new(dir.join(name), name.to_string()));
    }

    run_microgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "On branch master\n\
             Untracked files:\n\
             \tanother.txt\n\
             \tdir/nested.txt\n\
             \tfile.txt\n\n",
        );
}

#[rstest]
fn staged_files_are_listed_as_changes_to_be_committed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "b".to_string()));
    run_microgit_command(dir, &["add", "a.txt"]).assert().success();

    run_microgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "On branch master\n\
             Changes to be committed:\n\
             \tstaged:   a.txt\n\n\
             Untracked files:\n\
             \tb.txt\n\n",
        );
}

#[rstest]
fn staged_files_changed_on_disk_need_restaging(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("edited.txt"), "before".to_string()));
    write_file(FileSpec::new(dir.join("removed.txt"), "doomed".to_string()));
    run_microgit_command(dir, &["add", "."]).assert().success();

    write_file(FileSpec::new(dir.join("edited.txt"), "after".to_string()));
    std::fs::remove_file(dir.join("removed.txt")).unwrap();

    run_microgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "On branch master\n\
             Changes to be committed:\n\
             \tstaged:   edited.txt\n\
             \tstaged:   removed.txt\n\n\
             Changes not staged for commit:\n\
             \tmodified: edited.txt\n\
             \tdeleted:  removed.txt\n\n",
        );
}

#[rstest]
fn committed_content_is_not_reported(committed_repository_dir: TempDir) -> TestResult {
    let dir = committed_repository_dir.path();
    // a copy of committed content under a new name is already known
    write_file(FileSpec::new(dir.join("copy.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("later.txt"), "later".to_string()));
    run_microgit_command(dir, &["add", "later.txt"])
        .assert()
        .success();
    microgit_commit(dir, "Later").assert().success();

    run_microgit_command(dir, &["status"])
        .assert()
        .success()
        .stdout("On branch master\nnothing to commit, working tree clean\n");

    Ok(())
}
