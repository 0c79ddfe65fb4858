mod config;
mod fetch;
mod pipeline;

use constellation_render::RenderStyle;
use fetch::GitHubContributions;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub(crate) enum CliError {
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Write { source, .. } => Some(source),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let source = GitHubContributions::from_env();
    let today = chrono::Local::now().date_naive();
    let output = Path::new(config::OUTPUT_PATH);

    match pipeline::run(&source, today, RenderStyle::default(), output).await {
        Ok(summary) => tracing::debug!(
            seed = %summary.seed,
            stars = summary.stars,
            connections = summary.connections,
            output = %summary.output.display(),
            "run complete"
        ),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
}
