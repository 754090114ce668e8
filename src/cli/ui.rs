use std::future::Future;
use std::time::{Duration, Instant};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tracing::debug;

use crate::views::budgets::{BudgetProgress, StatusTier};
use crate::views::{RequestState, SubmitLabels};

const METER_WIDTH: usize = 20;

pub const REFRESH_LABELS: SubmitLabels = SubmitLabels {
    idle: "Refresh",
    busy: "Loading...",
};
pub const DELETE_LABELS: SubmitLabels = SubmitLabels {
    idle: "Delete",
    busy: "Deleting...",
};
pub const CREATE_USER_LABELS: SubmitLabels = SubmitLabels {
    idle: "Create User",
    busy: "Creating...",
};
pub const TOOLS_LABELS: SubmitLabels = SubmitLabels {
    idle: "Run Tools",
    busy: "Working...",
};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn money_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right)
}

/// Remaining budget: red once it goes negative.
pub fn remaining_cell(value: f64) -> Cell {
    let color = if value < 0.0 { Color::Red } else { Color::Green };
    money_cell(value).fg(color)
}

pub fn tier_color(tier: StatusTier) -> Color {
    match tier {
        StatusTier::Green => Color::Green,
        StatusTier::Yellow => Color::Yellow,
        StatusTier::Red => Color::Red,
    }
}

/// Percentage plus a bar filled up to 100%, coloured by tier.
pub fn progress_cell(progress: BudgetProgress) -> Cell {
    Cell::new(format!("{} {}", meter(progress), progress.label()))
        .fg(tier_color(progress.tier))
        .add_attribute(Attribute::Bold)
}

pub fn meter(progress: BudgetProgress) -> String {
    let filled = (progress.bar_width() / 100.0 * METER_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH.saturating_sub(filled))
    )
}

/// The error banner of a view, if its last request failed.
pub fn error_banner<T>(state: &RequestState<T>) -> Option<String> {
    state
        .error()
        .map(|message| style_text(&format!("Error: {message}"), StyleType::Error))
}

/// Creates a spinner showing `message` until finished.
pub fn new_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Drives `fut` to completion behind a spinner showing the busy label.
pub async fn while_loading<F: Future>(labels: SubmitLabels, fut: F) -> F::Output {
    let pb = new_spinner(labels.busy);
    let started = Instant::now();
    let output = fut.await;
    pb.finish_and_clear();
    debug!(
        action = labels.idle,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request settled"
    );
    output
}
