use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;

use stufftodo::api::TaskClient;
use stufftodo::core::config::{self, CliOverrides};
use stufftodo::tui;

#[derive(Parser)]
#[command(name = "stufftodo", about = "Terminal to-do list backed by a remote task API")]
struct Args {
    /// Base URL of the task API (overrides config and STUFFTODO_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Number of tasks visible at once
    #[arg(long)]
    page_size: Option<usize>,

    /// Stop at the ends of the list instead of wrapping around
    #[arg(long)]
    no_loop: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        base_url: args.base_url,
        page_size: args.page_size,
        no_loop: args.no_loop,
    };
    let resolved = config::resolve(&file_config, &cli).map_err(std::io::Error::other)?;

    // Initialize file logger - appends to the configured log file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&resolved.log_file)
    {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("stufftodo starting up");
    match config::config_path() {
        Some(path) => log::info!("Config file: {}", path.display()),
        None => log::info!("Config file: none (no home directory)"),
    }
    log::info!("Resolved config: {}", resolved.summary());

    let store = TaskClient::new(resolved.base_url.clone(), resolved.api_key.clone());
    tui::run(resolved, Box::new(store)).await
}
