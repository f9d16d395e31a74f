use clap::Parser;
use hp_core::{PipelineRequest, RecordStorage, Result};
use hp_sources::logging::init_logging;
use hp_sources::sources::hacker_news::DEFAULT_BASE_URL;
use hp_sources::{HackerNewsConfig, PipelineManager, DEFAULT_BATCH_SIZE};
use hp_storage::StorageKind;
use hp_web::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify and store the top Hacker News stories", long_about = None)]
pub struct Cli {
    /// Storage backend: sqlite or memory
    #[arg(long, default_value = "sqlite")]
    storage: StorageKind,
    /// SQLite database file
    #[arg(long, env = "HP_DATABASE", default_value = "database.db")]
    database: String,
    /// Base URL of the Hacker News API
    #[arg(long, env = "HP_UPSTREAM_URL", default_value = DEFAULT_BASE_URL)]
    upstream_url: String,
    /// Timeout for each upstream request, in seconds
    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
    /// How many top stories to process per run
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Run the pipeline once and print the report as JSON
    Run {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "cli")]
        source: String,
    },
    /// Print stored records as JSON
    Records {
        #[arg(long)]
        source: Option<String>,
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

async fn build_pipeline(cli: &Cli) -> Result<PipelineManager> {
    let storage: Arc<dyn RecordStorage> = hp_storage::create_storage(cli.storage, &cli.database).await?;
    info!("💾 Storage initialized successfully (using {})", cli.storage);

    let config = HackerNewsConfig::new(&cli.upstream_url, Duration::from_secs(cli.timeout_secs))?;
    let manager = PipelineManager::hacker_news(storage, config)?.with_batch_size(cli.batch_size);
    info!(
        "🦗 Upstream {} ready ({} stories per run)",
        manager.source_name(),
        manager.batch_size()
    );
    Ok(manager)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let manager = build_pipeline(&cli).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr = format!("{}:{}", host, port);
            hp_web::serve(AppState::new(manager), &addr).await?;
        }
        Commands::Run { email, source } => {
            let report = manager.run(&PipelineRequest { email, source }).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Records { source, limit } => {
            let storage = manager.storage();
            let records = match source {
                Some(source) => {
                    let mut records = storage.get_by_source(&source).await?;
                    records.truncate(limit);
                    records
                }
                None => storage.list_records(limit).await?,
            };
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hp", "run", "--email", "reader@example.com"]).unwrap();
        assert_eq!(cli.storage, StorageKind::SQLite);
        assert_eq!(cli.batch_size, 3);
        assert_eq!(cli.timeout_secs, 5);
        match cli.command {
            Commands::Run { email, source } => {
                assert_eq!(email, "reader@example.com");
                assert_eq!(source, "cli");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_storage() {
        assert!(Cli::try_parse_from(["hp", "--storage", "qdrant", "records"]).is_err());
    }

    #[tokio::test]
    async fn test_build_pipeline_with_sqlite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("cli.db");
        let cli = Cli::try_parse_from([
            "hp",
            "--database",
            db_path.to_str().unwrap(),
            "--batch-size",
            "2",
            "records",
        ])
        .unwrap();

        let manager = build_pipeline(&cli).await.unwrap();
        assert_eq!(manager.batch_size(), 2);
        assert_eq!(manager.source_name(), "Hacker News");
        assert!(manager.storage().list_records(10).await.unwrap().is_empty());
        assert!(db_path.exists());
    }
}
