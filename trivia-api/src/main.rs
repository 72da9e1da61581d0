use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use trivia_api::config::ApiConfig;
use trivia_api::storage::{SharedStorage, SqliteStorage};
use trivia_api::{app, logging, seed};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Insert the standard categories into an empty database
    Seed {
        /// Also insert a starter set of questions
        #[arg(long)]
        with_questions: bool,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig::load(args.config.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    info!(path = %config.database.path.display(), "Opening database");
    let storage: SharedStorage = Arc::new(SqliteStorage::open(&config.database.path)?);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => app::serve(&config, storage).await?,
        Command::Seed { with_questions } => {
            let report = seed::seed(storage.as_ref(), with_questions).await?;
            info!(
                categories = report.categories_created,
                questions = report.questions_created,
                "Seeding finished"
            );
        }
    }

    Ok(())
}
