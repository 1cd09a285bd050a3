use std::sync::Arc;

use clap::Parser;
use repodeck_api::GitHubClient;
use repodeck_core::GithubSource;
use repodeck_tui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "repodeck")]
#[command(version, about = "Terminal UI for browsing a user's GitHub repositories", long_about = None)]
struct Cli {
    /// Alternate API base URL (GitHub Enterprise or a local test server)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; the TUI owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repodeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(api_url = ?cli.api_url, "starting repodeck");

    let client = match cli.api_url {
        Some(url) => GitHubClient::with_base_url(url),
        None => GitHubClient::new(),
    };
    let source = Arc::new(GithubSource::new(client));

    repodeck_tui::run_tui(App::new(), source).await
}
