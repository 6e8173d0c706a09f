use crate::common::TestResult;
use crate::common::command::{init_repository_dir, run_microgit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn hash_object_prints_the_digest_of_raw_content(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    let digest = stdout_of(run_microgit_command(dir, &["hash-object", "hello.txt"]));

    assert_eq!(digest.trim(), "f572d396fae9206628714fb2ce00f72e94f2258f");
    assert!(
        dir.join(".microgit")
            .join("objects")
            .join("f5")
            .join("72d396fae9206628714fb2ce00f72e94f2258f")
            .is_file()
    );

    Ok(())
}

#[rstest]
fn hashing_identical_content_twice_is_idempotent(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "same".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "same".to_string()));

    let first = stdout_of(run_microgit_command(dir, &["hash-object", "a.txt"]));
    let second = stdout_of(run_microgit_command(dir, &["hash-object", "b.txt"]));

    assert_eq!(first, second);
    let objects = walkdir::WalkDir::new(dir.join(".microgit").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count();
    assert_eq!(objects, 1);

    Ok(())
}

#[rstest]
fn cat_file_prints_the_stored_content(init_repository_dir: TempDir) -> TestResult {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join("poem.txt"),
        "roses are red\nviolets are blue\n".to_string(),
    ));
    let digest = stdout_of(run_microgit_command(dir, &["hash-object", "poem.txt"]));

    run_microgit_command(dir, &["cat-file", digest.trim()])
        .assert()
        .success()
        .stdout("roses are red\nviolets are blue\n");

    Ok(())
}

#[rstest]
fn hash_object_of_a_missing_file_fails(init_repository_dir: TempDir) {
    run_microgit_command(init_repository_dir.path(), &["hash-object", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("file not found: ghost.txt"));
}

#[rstest]
#[case::unknown_digest("0123456789abcdef0123456789abcdef01234567", "object not found")]
#[case::malformed_digest("not-a-digest", "invalid object id")]
fn cat_file_rejects_unknown_objects(
    init_repository_dir: TempDir,
    #[case] digest: &str,
    #[case] message: &str,
) {
    run_microgit_command(init_repository_dir.path(), &["cat-file", digest])
        .assert()
        .success()
        .stderr(predicate::str::contains(message));
}
