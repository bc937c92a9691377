//! One-shot question: send, interpret, print, optionally export.

use crate::cli::Cli;
use crate::output;
use colored::Colorize;
use sibyl_foundation::deliverable::Deliverable;
use sibyl_foundation::insight::{self, ChartKind, InsightError, Visualization};
use std::path::Path;

pub async fn run(
    cli: &Cli,
    question: &str,
    export: Option<&Path>,
    demo: bool,
) -> anyhow::Result<()> {
    let session = super::build_session(cli)?;

    println!("{}", "Analyzing your data...".dimmed());
    let reply = match session.send_message(question).await {
        Ok(reply) => reply,
        Err(err) => anyhow::bail!("{}", err.user_message()),
    };

    let viz = match insight::interpret(&reply) {
        Ok(viz) => viz,
        Err(InsightError::NoData) if demo => {
            println!(
                "{}",
                "No trained data available; showing a demo visualization instead.".yellow()
            );
            Visualization::demo(ChartKind::Mixed)
        }
        Err(err) => anyhow::bail!("{err}"),
    };

    output::print_visualization(&viz)?;

    if let Some(path) = export {
        let deliverable = Deliverable::new(&reply, viz);
        output::write_deliverable(path, &deliverable)?;
        println!("{} {}", "exported".green(), path.display());
    }

    Ok(())
}
