use anyhow::Result;
use clap::{Parser, Subcommand};
use nit::areas::repository::Repository;
use nit::artifacts::core::RepoError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nit",
    version = "0.1.0",
    about = "A tiny local version-control system",
    long_about = "A single-user version-control engine with content-addressed \
    snapshots, a staging area, and branch pointers. It keeps its state under \
    a .nit directory in the repository root.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage a file for the next commit"
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message"
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file and mark it for removal"
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(
        name = "log",
        about = "Show the current branch's history"
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit ever made, across all branches"
    )]
    GlobalLog,
    #[command(
        name = "find",
        about = "Print the ids of all commits with the given message"
    )]
    Find {
        #[arg(index = 1, help = "The commit message to search for")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches and pending changes"
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "Three forms: `checkout -- <file>` restores the file from the \
        current head, `checkout <commit id> -- <file>` restores it from the given \
        commit, and `checkout <branch>` switches to the branch."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name or a commit id")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        path: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create a new branch at the current head"
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "rm-branch",
        about = "Delete a branch pointer"
    )]
    RmBranch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch head to the given commit"
    )]
    Reset {
        #[arg(index = 1, help = "The commit id")]
        commit: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        // operational failures are part of the conversation with the user,
        // printed as plain messages with a zero exit code
        match error.downcast_ref::<RepoError>() {
            Some(repo_error) => println!("{repo_error}"),
            None => return Err(error),
        }
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init { path } = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?.to_string_lossy().into_owned(),
        };

        Repository::init(&path, Box::new(std::io::stdout()))?;
        return Ok(());
    }

    let pwd = std::env::current_dir()?;
    let mut repository = Repository::open(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message } => repository.commit(message)?,
        Commands::Rm { file } => repository.rm(file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(message)?,
        Commands::Status => repository.status()?,
        Commands::Checkout { target, path } => match (target, path) {
            (None, Some(path)) => repository.checkout_file(path)?,
            (Some(id), Some(path)) => repository.checkout_file_from_commit(id, path)?,
            (Some(branch), None) => repository.checkout_branch(branch)?,
            (None, None) => return Err(RepoError::validation("Incorrect operands.")),
        },
        Commands::Branch { name } => repository.branch(name)?,
        Commands::RmBranch { name } => repository.rm_branch(name)?,
        Commands::Reset { commit } => repository.reset(commit)?,
    }

    Ok(())
}
