use crate::common::command::{
    get_head_digest, init_repository_dir, nit_commit, run_nit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_moves_the_head_and_deletes_files_the_target_does_not_track(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = get_head_digest(init_repository_dir.path())?;

    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "glorp".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    nit_commit(init_repository_dir.path(), "added glorp")
        .assert()
        .success();

    run_nit_command(init_repository_dir.path(), &["reset", &first])
        .assert()
        .success();

    assert_eq!(get_head_digest(init_repository_dir.path())?, first);
    assert!(!init_repository_dir.path().join("g.txt").exists());
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join("f.txt"))?,
        "wug"
    );

    // resetting to the same commit again changes nothing
    run_nit_command(init_repository_dir.path(), &["reset", &first])
        .assert()
        .success();
    assert_eq!(get_head_digest(init_repository_dir.path())?, first);
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join("f.txt"))?,
        "wug"
    );

    // committing again continues from the reset head
    write_file(FileSpec::new(
        init_repository_dir.path().join("h.txt"),
        "huh".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "h.txt"])
        .assert()
        .success();
    nit_commit(init_repository_dir.path(), "added huh")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master [0-9a-f]{6}\] added huh\n$")?);

    Ok(())
}

#[rstest]
fn reset_accepts_an_abbreviated_commit_id(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = get_head_digest(init_repository_dir.path())?;

    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "glorp".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    nit_commit(init_repository_dir.path(), "added glorp")
        .assert()
        .success();

    run_nit_command(init_repository_dir.path(), &["reset", &first[..8]])
        .assert()
        .success();
    assert_eq!(get_head_digest(init_repository_dir.path())?, first);

    Ok(())
}

#[rstest]
fn reset_to_an_unknown_commit_is_rejected(init_repository_dir: TempDir) {
    run_nit_command(
        init_repository_dir.path(),
        &["reset", "0123456789abcdef0123456789abcdef01234567"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn reset_clears_the_staging_area(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_digest(init_repository_dir.path())?;

    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "glorp".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "g.txt"])
        .assert()
        .success();

    run_nit_command(init_repository_dir.path(), &["reset", &head])
        .assert()
        .success();

    run_nit_command(init_repository_dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));

    Ok(())
}

#[rstest]
fn reset_refuses_to_overwrite_an_untracked_file(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = get_head_digest(init_repository_dir.path())?;

    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "glorp".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    nit_commit(init_repository_dir.path(), "added glorp")
        .assert()
        .success();
    let second = get_head_digest(init_repository_dir.path())?;

    run_nit_command(init_repository_dir.path(), &["reset", &first])
        .assert()
        .success();

    // an untracked g.txt blocks resetting forward again
    write_file(FileSpec::new(
        init_repository_dir.path().join("g.txt"),
        "untracked".to_string(),
    ));
    run_nit_command(init_repository_dir.path(), &["reset", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));

    assert_eq!(get_head_digest(init_repository_dir.path())?, first);
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join("g.txt"))?,
        "untracked"
    );

    Ok(())
}
