//! CLI module for the Team Roster API

pub mod serve;

use clap::{Parser, Subcommand};

/// Team Roster - In-memory team member registry over HTTP
#[derive(Parser)]
#[command(name = "team-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
