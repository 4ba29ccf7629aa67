use crate::common::command::{init_repository_dir, repository_dir, run_nit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_stages_the_file_and_writes_its_staged_copy(repository_dir: TempDir) {
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("f.txt"),
        "wug".to_string(),
    ));

    run_nit_command(repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(repository_dir.path().join(".nit/staged/f.txt").exists());
    run_nit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nf.txt"));
}

#[rstest]
fn add_of_a_missing_file_prints_a_notice(repository_dir: TempDir) {
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_nit_command(repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist."));
}

#[rstest]
fn add_of_an_unchanged_committed_file_stages_nothing(init_repository_dir: TempDir) {
    run_nit_command(init_repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    run_nit_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
    run_nit_command(init_repository_dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));
}

#[rstest]
fn re_adding_the_original_content_aborts_the_pending_add(init_repository_dir: TempDir) {
    write_file(FileSpec::new(
        init_repository_dir.path().join("f.txt"),
        "notwug".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    // back to the committed content
    write_file(FileSpec::new(
        init_repository_dir.path().join("f.txt"),
        "wug".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    assert!(!init_repository_dir.path().join(".nit/staged/f.txt").exists());
    run_nit_command(init_repository_dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));
}
