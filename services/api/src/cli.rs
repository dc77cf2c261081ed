use crate::commands::{run_catalog, run_questions, run_scope, CatalogArgs, QuestionsArgs, ScopeArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use living_legacy::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "living-legacy",
    about = "Scope Living Legacy projects and build tailored interview guides",
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
    /// List legacy types or show one type's scoping questions
    Catalog(CatalogArgs),
    /// Print the interview guide derived from a saved scoping session
    Questions(QuestionsArgs),
    /// Finalize a scoping session: save the project and write exports
    Scope(ScopeArgs),
    /// Run a canned scoping session end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory finalized projects are saved to
    #[arg(long)]
    pub(crate) projects_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Questions(args) => run_questions(args),
        Command::Scope(args) => run_scope(args),
        Command::Demo(args) => run_demo(args),
    }
}
