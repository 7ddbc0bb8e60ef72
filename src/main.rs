//! # Keyline Main Entry Point
//!
//! Keyboard-driven single-field editor surface for the terminal.

use anyhow::Result;
use keyline::cmd_args::CommandLineArgs;
use keyline::AppController;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    // Diagnostics go to stderr; the editor's own event log is domain data
    let filter = if args.verbose() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app = AppController::new(args)?;
    app.run().await?;

    println!("Thanks for using keyline!");
    Ok(())
}
