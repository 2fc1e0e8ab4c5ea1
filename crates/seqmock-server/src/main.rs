//! seqmock
//!
//! Mock sequencer API for local devnet testing

use clap::Parser;

use seqmock_core::logging_facility::{init, Profile};
use seqmock_core::seed_from_env;
use seqmock_server::{bind, serve, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "seqmock")]
#[command(about = "Mock sequencer API for local devnet testing", long_about = None)]
struct Cli {
    /// Port to listen on (all interfaces)
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // A missing .env is fine
    dotenvy::dotenv().ok();
    init(Profile::from_env());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Requests are served one at a time on a single-threaded runtime
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let seed = seed_from_env();
    runtime.block_on(async move {
        let listener = bind(cli.port).await?;
        serve(listener, seed).await
    })?;
    Ok(())
}
