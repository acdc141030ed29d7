use std::process;

use tracing_subscriber::EnvFilter;

use chronicle::{cli, config::Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CHRONICLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
