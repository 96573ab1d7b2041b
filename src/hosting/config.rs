use clap::Parser;

/// Command-line and environment configuration for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(name = "hosting", about = "Rock-paper-scissors match server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = crate::DEFAULT_BIND_ADDR)]
    pub bind: String,
    /// HTTP worker threads.
    #[arg(long, default_value_t = crate::DEFAULT_WORKERS)]
    pub workers: usize,
    /// Seed for the shape dice. Omit for OS entropy.
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,
}
