//! CLI module for the Nova chat service
//!
//! Provides subcommands for the two entrypoints:
//! - `serve`: HTTP chat API + static widget pages (default)
//! - `chat`: interactive console loop

pub mod chat;
pub mod serve;

use clap::{Parser, Subcommand};

/// Nova - retrieval-augmented chat service
#[derive(Parser)]
#[command(name = "nova-chat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default mode)
    Serve,

    /// Chat with Nova on the console
    Chat,
}
