//! Canned report prompts to get a conversation started.

use colored::Colorize;

/// (title, prompt) pairs offered as starting points.
pub const SUGGESTED_REPORTS: [(&str, &str); 4] = [
    (
        "Predictive Analytics",
        "Generate predictive analytics for next quarter's performance",
    ),
    (
        "Weekly Action Plan",
        "Create a weekly action plan based on current metrics",
    ),
    (
        "Social Media Pulse",
        "Analyze our social media performance across platforms",
    ),
    (
        "Competitive Edge",
        "Compare our market position with competitors",
    ),
];

pub fn run() {
    println!("{}", "Suggested reports:".bold());
    for (title, prompt) in SUGGESTED_REPORTS {
        println!("  {} {}", title.bold(), format!("- {prompt}").dimmed());
    }
}
