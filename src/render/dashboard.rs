//! Dashboard fragments

use super::{Element, Markup};
use crate::models::StatisticsSnapshot;

fn stat_item(label: &str, value: &str) -> Markup {
    Element::new("div")
        .class("stat-item")
        .child(Element::new("span").class("stat-label").text(label).build())
        .child(Element::new("span").class("stat-value").text(value).build())
        .build()
}

/// Render the four disk statistics rows.
#[must_use]
pub fn render_stats(snapshot: &StatisticsSnapshot) -> Markup {
    Markup::concat([
        stat_item("Total Space:", &snapshot.total_space_formatted),
        stat_item("Free Space:", &snapshot.free_space_formatted),
        stat_item("Usable Space:", &snapshot.usable_space_formatted),
        stat_item("Space Used:", &snapshot.used_space_percentage),
    ])
}

#[must_use]
pub fn render_stats_error(message: &str) -> Markup {
    Element::new("p")
        .text(&format!("Error loading disk statistics: {message}"))
        .build()
}
