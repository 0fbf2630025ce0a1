use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wiki_core::ArticleCatalog;
use wiki_storage::MemoryCatalog;
use wiki_summary::{create_model, Config, Explainer};
use wiki_web::AppState;

const DEFAULT_LOG_FILTER: &str = "wiki=info,wiki_web=info,wiki_summary=info,tower_http=debug,warn";

#[derive(Parser, Debug)]
#[command(author, version, about = "Five-sentence encyclopedia over HTTP", long_about = None)]
pub struct Cli {
    #[arg(long, env = "WIKI_HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "WIKI_PORT", default_value_t = 8000)]
    port: u16,
    #[arg(
        long,
        env = "WIKI_SUMMARY_SOURCE",
        default_value = "wikipedia",
        help = "Summary source for /ai/explain. Available sources: wikipedia (default), dummy"
    )]
    summary_source: String,
    #[arg(long, env = "WIKI_SUMMARY_URL", default_value = wiki_summary::DEFAULT_SUMMARY_URL)]
    summary_url: String,
    /// Timeout for summary requests, in seconds
    #[arg(long, env = "WIKI_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
    /// Log filter, e.g. `wiki_web=debug`. Falls back to RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API (default)
    Serve,
    /// Print the five-sentence explanation of a term
    Explain { term: String },
    /// Search article titles
    Search { query: String },
    /// List all categories
    Categories,
}

impl Cli {
    fn summary_config(&self) -> Config {
        Config {
            model_name: Some(self.summary_source.clone()),
            base_url: self.summary_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
    }

    fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}: {}", addr, e))
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn serve(cli: &Cli) -> anyhow::Result<()> {
    let addr = cli.addr()?;
    let state = AppState::from_config(&cli.summary_config())?;
    info!("🌐 Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    wiki_web::serve(listener, state).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    match cli.command.as_ref().unwrap_or(&Commands::Serve) {
        Commands::Serve => serve(&cli).await?,
        Commands::Explain { term } => {
            let explainer = Explainer::new(create_model(&cli.summary_config())?);
            print_json(&explainer.explain(term).await?)?;
        }
        Commands::Search { query } => {
            print_json(&MemoryCatalog::load()?.search(query))?;
        }
        Commands::Categories => {
            print_json(&MemoryCatalog::load()?.list_categories())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wiki"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.addr().unwrap().port(), 8000);

        let config = cli.summary_config();
        assert_eq!(config.model_name.as_deref(), Some("wikipedia"));
        assert_eq!(config.base_url, wiki_summary::DEFAULT_SUMMARY_URL);
        assert_eq!(config.user_agent, wiki_summary::DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_explain_command() {
        let cli = Cli::try_parse_from([
            "wiki",
            "--summary-source",
            "dummy",
            "--timeout-secs",
            "3",
            "explain",
            "Ozean",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Explain { ref term }) if term == "Ozean"));
        assert_eq!(cli.summary_config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_default_log_filter() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("wiki=info"));
        assert!(rendered.contains("tower_http=debug"));
    }

    #[test]
    fn test_invalid_host() {
        let cli = Cli::try_parse_from(["wiki", "--host", "nicht gültig"]).unwrap();
        assert!(cli.addr().is_err());
    }
}
