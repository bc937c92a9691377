//! Terminal rendering of visualization descriptors and deliverable export.

use colored::Colorize;
use sibyl_foundation::deliverable::Deliverable;
use sibyl_foundation::insight::Visualization;
use std::path::Path;

/// Print a descriptor summary followed by its dataset as pretty JSON, ready
/// to hand to a downstream renderer.
pub fn print_visualization(viz: &Visualization) -> anyhow::Result<()> {
    println!();
    println!("{} {}", "▸".bold(), viz.title.bold());
    if !viz.description.is_empty() {
        println!("  {}", viz.description);
    }
    println!("  {} {}", "chart:".dimmed(), viz.kind);
    if viz.is_fallback {
        println!("  {}", "sample data, not real figures".yellow());
    }
    println!("{}", serde_json::to_string_pretty(&viz.dataset)?);
    Ok(())
}

/// Write the deliverable as pretty JSON.
pub fn write_deliverable(path: &Path, deliverable: &Deliverable) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, deliverable)?;
    Ok(())
}
