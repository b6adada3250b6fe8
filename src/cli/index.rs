//! One-shot index command

use anyhow::{Context, Result};
use dialoguer::Input;
use std::process::ExitCode;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::core::PageController;
use crate::ui::{self, page, SiteTheme};

pub async fn run(config: &Config, client: &BackendClient, url: Option<String>) -> Result<ExitCode> {
    let theme = SiteTheme::new(config.general.theme);
    let url = match url {
        Some(url) => url,
        None => prompt(&theme, "Website URL")?,
    };

    let mut controller = PageController::new();
    controller.set_url_input(url);

    let spinner = ui::spinner("Indexing...");
    controller.index(client).await;
    spinner.finish_and_clear();

    let state = controller.state();
    if let Some(badge) = page::indexed_badge(state, &theme) {
        println!("{}", badge);
    }
    if let Some(message) = state.receipt().and_then(|r| r.message.as_deref()) {
        println!("{}", theme.muted.apply_to(message));
    }

    let outcome = page::render_outcome(state, &theme);
    if !outcome.is_empty() {
        println!("{}", outcome);
    }

    Ok(super::exit_code(state))
}

/// Ask for a value on the terminal. Empty answers are allowed so the page's
/// own validation reports them.
pub(super) fn prompt(theme: &SiteTheme, label: &str) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}
