//! View subcommand - open the 3D visualizer.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::models::Catalog;
use crate::visualization::run_visualizer;

/// Open the 3D visualizer.
#[derive(Parser)]
pub struct ViewCommand {
    /// Path to a catalog JSON file. Uses the built-in catalog when omitted.
    pub catalog: Option<PathBuf>,
}

impl ViewCommand {
    /// Run the view command. Blocks until the window is closed.
    pub fn run(self) -> color_eyre::Result<()> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded(),
        };
        let config = Config::load()?;

        tracing::info!(
            categories = catalog.categories.len(),
            nodes = catalog.nodes.len(),
            "starting visualizer"
        );
        run_visualizer(catalog, config);
        Ok(())
    }
}
