//! Interactive chat: question in, descriptor out, until the user leaves.

use crate::cli::Cli;
use crate::output;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use sibyl_foundation::insight::{self, ChartKind, InsightError, Visualization};

pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let session = super::build_session(cli)?;

    println!("{}", "How can I help you with data today?".bold());
    println!("{}", "(type 'exit' to leave; try one of these)".dimmed());
    for (_, prompt) in super::suggest::SUGGESTED_REPORTS {
        println!("  {}", prompt.dimmed());
    }

    loop {
        let line: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let question = line.trim();

        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("{}", "Analyzing your data...".dimmed());
        let reply = match session.send_message(question).await {
            Ok(reply) => reply,
            Err(err) => {
                println!("{}", err.user_message().red());
                continue;
            }
        };

        match insight::interpret(&reply) {
            Ok(viz) => output::print_visualization(&viz)?,
            Err(InsightError::NoData) => {
                let show_demo = Confirm::new()
                    .with_prompt(
                        "No trained data is available for this request. Show a demo visualization instead?",
                    )
                    .default(true)
                    .interact()?;
                if show_demo {
                    output::print_visualization(&Visualization::demo(ChartKind::Mixed))?;
                }
            }
        }
    }

    Ok(())
}
