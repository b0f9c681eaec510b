use crate::demo::{
    run_demo, run_directory, run_quiz, run_triage, DirectoryArgs, TriageArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use legal_help::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Legal Help Directory",
    about = "Find legal help: triage quiz, lawyer and legal-aid listings, and the HTTP service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the recommendation for a set of answers
    Triage(TriageArgs),
    /// Walk through the triage quiz interactively
    Quiz,
    /// Browse the directory listings
    Directory {
        #[command(subcommand)]
        command: DirectoryArgs,
    },
    /// Run the canonical triage scenarios end to end
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Triage(args) => run_triage(args),
        Command::Quiz => run_quiz(),
        Command::Directory { command } => run_directory(command),
        Command::Demo => run_demo(),
    }
}
