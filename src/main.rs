use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use microgit::areas::repository::Repository;
use microgit::commands::porcelain::log::LogOptions;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "MICROGIT_LOG";

#[derive(Parser)]
#[command(
    name = "microgit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "microgit keeps snapshots of a working directory in a content-addressed, \
    zlib-compressed object store, with branches, a staging area, checkout and a union merge.",
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
        name = "hash-object",
        about = "Store a file in the object database and print its digest"
    )]
    HashObject {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(index = 1, help = "The object digest to print")]
        object_id: String,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages files (or every file below a directory). \
        Content that is already part of the history is skipped."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1..)]
        paths: Vec<String>,
    },
    #[command(name = "reset", about = "Remove files from the staging area")]
    Reset {
        #[arg(index = 1, required = true, num_args = 1..)]
        files: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit history reachable from HEAD")]
    Log {
        #[arg(long, help = "Also follow the merged parent of merge commits")]
        all_parents: bool,
        #[arg(long, help = "Print one line per commit")]
        oneline: bool,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or detach HEAD at a commit",
        long_about = "This command rewrites the working tree to match the target. \
        Uncommitted changes are overwritten."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit digest")]
        target: String,
    },
    #[command(name = "branch", about = "List branches, or create one at HEAD")]
    Branch {
        #[arg(index = 1)]
        name: Option<String>,
    },
    #[command(name = "status", about = "Show staged, changed and untracked files")]
    Status,
    #[command(name = "merge", about = "Merge a branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    // failures are reported, not signalled through the exit status
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
    }
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    match path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout())),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => open_repository(path.as_deref())?.init(),
        Commands::HashObject { file } => open_repository(None)?.hash_object(&file),
        Commands::CatFile { object_id } => open_repository(None)?.cat_file(&object_id),
        Commands::Add { paths } => open_repository(None)?.add(&paths),
        Commands::Reset { files } => open_repository(None)?.reset(&files),
        Commands::Commit { message } => open_repository(None)?.commit(&message),
        Commands::Log {
            all_parents,
            oneline,
        } => open_repository(None)?.log(&LogOptions {
            all_parents,
            oneline,
        }),
        Commands::Checkout { target } => open_repository(None)?.checkout(&target),
        Commands::Branch { name } => open_repository(None)?.branch(name.as_deref()),
        Commands::Status => open_repository(None)?.status(),
        Commands::Merge { branch } => open_repository(None)?.merge(&branch),
    }
}
