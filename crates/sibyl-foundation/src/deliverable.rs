//! Deliverable assembly: the exportable artifact wrapping a visualization
//! descriptor with its title, the full reply text, and a timestamp.

use crate::insight::Visualization;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Export-ready bundle handed to downstream renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliverable {
    pub title: String,
    /// The assistant's full reply text.
    pub summary: String,
    pub generated_at: DateTime<Local>,
    pub visualization: Visualization,
}

impl Deliverable {
    /// Assemble a deliverable from a reply and its derived descriptor.
    pub fn new(reply: &str, visualization: Visualization) -> Self {
        Self {
            title: visualization.title.clone(),
            summary: reply.to_string(),
            generated_at: Local::now(),
            visualization,
        }
    }
}
