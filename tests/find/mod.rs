use crate::common::command::{
    get_head_digest, init_repository_dir, nit_commit, run_nit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_prints_the_digest_of_each_matching_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_digest(init_repository_dir.path())?;

    run_nit_command(init_repository_dir.path(), &["find", "added wug"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{head}\n")));

    Ok(())
}

#[rstest]
fn find_lists_every_commit_sharing_the_message(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "glorp".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    nit_commit(init_repository_dir.path(), "added wug")
        .assert()
        .success();

    let output = run_nit_command(init_repository_dir.path(), &["find", "added wug"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let digests: Vec<&str> = stdout.lines().collect();
    assert_eq!(digests.len(), 2);
    assert!(digests.iter().all(|d| d.len() == 40));
    assert_ne!(digests[0], digests[1]);

    Ok(())
}

#[rstest]
fn find_with_an_unknown_message_reports_nothing_found(init_repository_dir: TempDir) {
    run_nit_command(init_repository_dir.path(), &["find", "no such message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no commit with that message."));
}
