use std::ffi::OsString;

pub use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Quiet period for the debounced highlight pass, in milliseconds.
    /// Overrides the KEYLINE_DEBOUNCE_MS environment variable when given.
    #[clap(short = 'd', long, help = "debounce delay in milliseconds")]
    debounce_ms: Option<u64>,

    /// Enable verbose diagnostic logging
    #[clap(short = 'v', long, help = "verbose logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    debounce_ms: Option<u64>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            debounce_ms: args.debounce_ms,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            debounce_ms: args.debounce_ms,
            verbose: args.verbose,
        }
    }

    /// Effective debounce delay: flag wins over env var, env var over default
    pub fn debounce_delay(&self) -> std::time::Duration {
        match self.debounce_ms {
            Some(ms) => std::time::Duration::from_millis(ms),
            None => config::get_debounce_delay(),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
