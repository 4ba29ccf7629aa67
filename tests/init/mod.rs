use crate::common::command::{get_head_digest, read_state, repository_dir, run_nit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_creates_the_storage_areas_and_the_root_commit(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty nit repository in"));

    let repo_dir = repository_dir.path().join(".nit");
    for area in ["objects", "staged", "branches", "commits", "repo"] {
        assert!(repo_dir.join(area).exists(), "missing area {area}");
    }

    let state = read_state(repository_dir.path())?;
    assert_eq!(state["current_branch"], "master");

    let head = get_head_digest(repository_dir.path())?;
    assert_eq!(state["commits_by_digest"][&head]["message"], "initial commit");
    assert!(repo_dir.join("commits").join(format!("{head}.json")).exists());
    assert!(
        repo_dir
            .join("branches")
            .join("master")
            .join(format!("{head}.json"))
            .exists()
    );

    Ok(())
}

#[rstest]
fn init_twice_reports_the_existing_repository(repository_dir: TempDir) {
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A nit version-control system already exists in the current directory.",
        ));
}

#[rstest]
fn root_commits_share_one_digest_across_repositories(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let other_dir = TempDir::new()?;
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    run_nit_command(other_dir.path(), &["init"]).assert().success();

    assert_eq!(
        get_head_digest(repository_dir.path())?,
        get_head_digest(other_dir.path())?
    );

    Ok(())
}

#[rstest]
fn commands_before_init_report_the_missing_repository(repository_dir: TempDir) {
    for args in [
        ["log"].as_slice(),
        ["status"].as_slice(),
        ["add", "f.txt"].as_slice(),
    ] {
        run_nit_command(repository_dir.path(), args)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Not in an initialized nit directory.",
            ));
    }
}
