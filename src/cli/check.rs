//! Check subcommand - catalog integrity report.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;

use crate::models::Catalog;

/// Validate a catalog and print an integrity report.
#[derive(Parser)]
pub struct CheckCommand {
    /// Path to a catalog JSON file. Checks the built-in catalog when omitted.
    pub catalog: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command.
    ///
    /// Orphan nodes (unknown category) fail the check: the scene would skip
    /// them entirely. Dangling relationship targets only warn, since the
    /// dataset may intentionally reference tools it does not include.
    pub fn run(self) -> color_eyre::Result<()> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded(),
        };
        let audit = catalog.audit();

        for (node, category) in &audit.orphan_nodes {
            tracing::error!(%node, %category, "node references unknown category");
        }
        for (from, to) in &audit.dangling_relations {
            tracing::warn!(%from, %to, "relationship target not in catalog");
        }

        println!(
            "{} categories, {} nodes, {} orphan node(s), {} dangling relation(s)",
            catalog.categories.len(),
            catalog.nodes.len(),
            audit.orphan_nodes.len(),
            audit.dangling_relations.len(),
        );

        if audit.orphan_nodes.is_empty() {
            Ok(())
        } else {
            Err(eyre!(
                "{} node(s) reference unknown categories",
                audit.orphan_nodes.len()
            ))
        }
    }
}
