//! Terminal rendering for the search page

pub mod page;
pub mod result_card;
pub mod theme;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub use theme::{SiteTheme, ThemeMode};

/// Spinner shown while a request is in flight
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));

    pb
}
