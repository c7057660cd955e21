use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use latest_releases::app::check_repositories;
use latest_releases::config::{DEFAULT_GITHUB_API_URL, log_path};
use latest_releases::input::read_repo_file;
use latest_releases::report::{OutputFormat, write_reports};
use latest_releases::telemetry::init_tracing;
use latest_releases::version::registries::GitHubRegistry;

#[derive(Parser)]
#[command(name = "latest-releases")]
#[command(
    version,
    about = "Report the newest stable release of every minor line for GitHub repositories"
)]
struct Cli {
    /// Repositories file, one `owner/name,min_version` per line
    file: PathBuf,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    api_url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Also append logs to the data directory log file
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.then(log_path);
    let _guard = init_tracing(cli.log_level, log_file.as_deref())?;

    let repos = match read_repo_file(&cli.file) {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("[File Read Error] {e}");
            return Ok(());
        }
    };

    if repos.is_empty() {
        eprintln!("No repositories provided in {}", cli.file.display());
        return Ok(());
    }

    let registry = GitHubRegistry::new(&cli.api_url)?;

    let reports = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(check_repositories(&registry, &repos));

    write_reports(&mut io::stdout().lock(), &reports, cli.format)?;

    Ok(())
}
