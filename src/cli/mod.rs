//! CLI module for Technograph.
//!
//! Subcommands:
//! - `view`: Open the 3D visualizer
//! - `check`: Validate a catalog without opening a window

mod check;
mod view;

use clap::{Parser, Subcommand};

pub use check::CheckCommand;
pub use view::ViewCommand;

/// Technograph - 3D technology knowledge graph
#[derive(Parser)]
#[command(name = "technograph")]
#[command(about = "Navigable 3D knowledge graph of technology tools")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the 3D visualizer
    View(ViewCommand),

    /// Validate a catalog and print an integrity report
    Check(CheckCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::View(cmd) => cmd.run(),
            Command::Check(cmd) => cmd.run(),
        }
    }
}
