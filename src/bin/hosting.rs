//! Hosting Server Binary
//!
//! Serves the rock-paper-scissors match API.
//! Listens on --bind / BIND_ADDR (default 127.0.0.1:5000).

use clap::Parser;
use rochambeau::hosting::Config;
use rochambeau::hosting::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rochambeau::log("hosting");
    Server::run(Config::parse()).await
}
