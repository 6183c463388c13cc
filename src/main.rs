use clap::Parser;
use quire::core::config;
use quire::core::location::Location;
use quire::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "quire", about = "Terminal front-end for a minimal blog")]
struct Args {
    /// Base URL of the blog API (overrides QUIRE_API_URL and the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Location to open, e.g. "/?page=2", "/post/7" or "/create"
    #[arg(short, long)]
    location: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quire.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("quire.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Quire starting up");

    let path = config::config_path();
    let resolved = match config::load_resolved(
        path.as_deref(),
        args.api_url.as_deref(),
        args.location.as_deref(),
    ) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Unusable config file: {}", e);
            eprintln!("quire: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start = match Location::parse(&resolved.start_location) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("quire: {e}");
            return ExitCode::FAILURE;
        }
    };
    let api = match tui::build_api(&resolved) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("quire: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(api, &resolved, start) {
        Ok(last) => {
            println!("Reopen with: quire --location '{last}'");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("quire: {e}");
            ExitCode::FAILURE
        }
    }
}
