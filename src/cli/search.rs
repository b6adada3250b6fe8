//! One-shot search command

use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::core::{PageController, Trigger};
use crate::ui::{self, page, SiteTheme};

pub async fn run(
    config: &Config,
    client: &BackendClient,
    query: Option<String>,
    json: bool,
    show_html: bool,
) -> Result<ExitCode> {
    let theme = SiteTheme::new(config.general.theme);
    let query = match query {
        Some(query) => query,
        None => super::index::prompt(&theme, "Search query")?,
    };

    let mut controller = PageController::new();
    controller.set_query_input(query);

    if json {
        if let Trigger::Started(query) = controller.begin_search() {
            let spinner = ui::spinner("Searching...");
            let outcome = client.submit_query(&query).await;
            spinner.finish_and_clear();

            if let Ok(body) = &outcome {
                let pretty = serde_json::to_string_pretty(body)
                    .context("Failed to serialize search response")?;
                println!("{}", pretty);
            }
            controller.complete_search(outcome);
        }

        if let Some(message) = controller.state().error_message() {
            eprintln!("{}", theme.error.apply_to(message));
        }
        return Ok(super::exit_code(controller.state()));
    }

    let spinner = ui::spinner("Searching...");
    controller.search(client).await;
    spinner.finish_and_clear();

    if show_html {
        for index in 0..controller.state().cards().len() {
            controller.toggle_html(index);
        }
    }

    let state = controller.state();
    let outcome = page::render_outcome(state, &theme);
    if outcome.is_empty() {
        println!("{}", theme.muted.apply_to("No results."));
    } else {
        println!("{}", outcome);
    }

    Ok(super::exit_code(state))
}
