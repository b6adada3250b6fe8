//! Interactive search page
//!
//! Input lines arrive on a channel fed by a stdin reader thread; requests run
//! as tasks on the same current-thread runtime. Both are polled by one loop,
//! so an index request and a search request can be in flight together and
//! the page stays responsive while they run.

use anyhow::Result;
use serde_json::Value;
use std::io::{self, BufRead, Write};
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::backend::{BackendClient, ClientError};
use crate::config::Config;
use crate::core::{PageController, Trigger};
use crate::ui::{page, SiteTheme};

/// A user action typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetUrl(String),
    Index(Option<String>),
    SetQuery(String),
    Search(Option<String>),
    ToggleHtml(usize),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Card numbers are 1-based.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let argument = || (!rest.is_empty()).then(|| rest.to_string());

        match word.to_lowercase().as_str() {
            "" | "show" => Ok(Self::Show),
            "url" | "u" => Ok(Self::SetUrl(rest.to_string())),
            "index" | "i" => Ok(Self::Index(argument())),
            "query" | "q" => Ok(Self::SetQuery(rest.to_string())),
            "search" | "s" => Ok(Self::Search(argument())),
            "html" | "h" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::ToggleHtml(n - 1)),
                _ => Err("Usage: html <result number>".to_string()),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q!" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        }
    }
}

/// Finished backend request
enum Completion {
    Indexed(Result<Value, ClientError>),
    Searched(Result<Value, ClientError>),
}

pub async fn run(config: &Config, client: &BackendClient) -> Result<()> {
    let theme = SiteTheme::new(config.general.theme);
    let mut controller = PageController::new();
    let mut in_flight: JoinSet<Completion> = JoinSet::new();

    let (tx, rx) = async_channel::unbounded::<String>();
    std::thread::spawn(move || read_lines(tx));

    print_help(&theme);
    redraw(&controller, &theme);

    let mut input_closed = false;
    loop {
        // Scripted input: once stdin ends, let outstanding requests land.
        if input_closed && in_flight.is_empty() {
            break;
        }

        tokio::select! {
            line = rx.recv(), if !input_closed => {
                let Ok(line) = line else {
                    debug!("Input closed");
                    input_closed = true;
                    continue;
                };

                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        print_help(&theme);
                        print_prompt(&theme);
                    }
                    Ok(command) => {
                        apply(command, &mut controller, client, &mut in_flight, &theme);
                        redraw(&controller, &theme);
                    }
                    Err(message) => {
                        println!("{}", theme.muted.apply_to(message));
                        print_prompt(&theme);
                    }
                }
            }
            Some(joined) = in_flight.join_next() => {
                match joined {
                    Ok(Completion::Indexed(outcome)) => controller.complete_index(outcome),
                    Ok(Completion::Searched(outcome)) => controller.complete_search(outcome),
                    Err(e) => error!("Request task failed: {}", e),
                }
                redraw(&controller, &theme);
            }
            else => break,
        }
    }

    println!();
    Ok(())
}

fn apply(
    command: Command,
    controller: &mut PageController,
    client: &BackendClient,
    in_flight: &mut JoinSet<Completion>,
    theme: &SiteTheme,
) {
    match command {
        Command::SetUrl(url) => controller.set_url_input(url),
        Command::SetQuery(query) => controller.set_query_input(query),
        Command::Index(url) => {
            if let Some(url) = url {
                controller.set_url_input(url);
            }
            match controller.begin_index() {
                Trigger::Started(url) => {
                    let client = client.clone();
                    in_flight.spawn(async move {
                        Completion::Indexed(client.submit_for_indexing(&url).await)
                    });
                }
                Trigger::Busy => println!("{}", theme.muted.apply_to("Indexing is already running.")),
                Trigger::Invalid => {}
            }
        }
        Command::Search(query) => {
            if let Some(query) = query {
                controller.set_query_input(query);
            }
            match controller.begin_search() {
                Trigger::Started(query) => {
                    let client = client.clone();
                    in_flight.spawn(async move {
                        Completion::Searched(client.submit_query(&query).await)
                    });
                }
                Trigger::Busy => println!("{}", theme.muted.apply_to("A search is already running.")),
                Trigger::Invalid => {}
            }
        }
        Command::ToggleHtml(index) => {
            if !controller.toggle_html(index) {
                println!("{}", theme.muted.apply_to(format!("No result #{}", index + 1)));
            }
        }
        Command::Show | Command::Help | Command::Quit => {}
    }
}

/// Blocking stdin reader; ends when stdin closes or the loop goes away.
fn read_lines(tx: async_channel::Sender<String>) {
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if tx.send_blocking(line).is_err() {
            break;
        }
    }
}

fn redraw(controller: &PageController, theme: &SiteTheme) {
    println!();
    println!("{}", theme.muted.apply_to("─".repeat(55)));
    println!("{}", page::render_page(controller.state(), theme));
    print_prompt(theme);
}

fn print_prompt(theme: &SiteTheme) {
    print!("{}", theme.title.apply_to(theme.prompt_prefix()));
    io::stdout().flush().ok();
}

fn print_help(theme: &SiteTheme) {
    println!();
    println!("{}", theme.title.apply_to("Available Commands:"));
    let rows = [
        ("url <address>", "Set the website URL"),
        ("index [address]", "Index the website"),
        ("query <text>", "Set the search query"),
        ("search [text]", "Run the search"),
        ("html <n>", "Show or hide the raw HTML of result n"),
        ("show", "Redraw the page"),
        ("help", "Show this help message"),
        ("quit", "Exit"),
    ];
    for (command, description) in rows {
        println!(
            "  {:<18}{}",
            theme.text.apply_to(command),
            theme.muted.apply_to(description)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("url https://example.com"),
            Ok(Command::SetUrl("https://example.com".to_string()))
        );
        assert_eq!(Command::parse("index"), Ok(Command::Index(None)));
        assert_eq!(
            Command::parse("  search   how to install  "),
            Ok(Command::Search(Some("how to install".to_string())))
        );
        assert_eq!(Command::parse("query"), Ok(Command::SetQuery(String::new())));
        assert_eq!(Command::parse("html 2"), Ok(Command::ToggleHtml(1)));
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("html").is_err());
        assert!(Command::parse("html 0").is_err());
        assert!(Command::parse("html two").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[tokio::test]
    async fn test_apply_starts_both_actions() {
        let client = BackendClient::new("http://127.0.0.1:1").unwrap();
        let theme = SiteTheme::default();
        let mut controller = PageController::new();
        let mut in_flight = JoinSet::new();

        apply(
            Command::Index(Some("https://example.com".to_string())),
            &mut controller,
            &client,
            &mut in_flight,
            &theme,
        );
        apply(
            Command::Search(Some("pricing".to_string())),
            &mut controller,
            &client,
            &mut in_flight,
            &theme,
        );

        assert!(controller.state().is_indexing());
        assert!(controller.state().is_searching());
        assert_eq!(in_flight.len(), 2);

        while let Some(joined) = in_flight.join_next().await {
            match joined.unwrap() {
                Completion::Indexed(outcome) => controller.complete_index(outcome),
                Completion::Searched(outcome) => controller.complete_search(outcome),
            }
        }

        assert!(!controller.state().is_indexing());
        assert!(!controller.state().is_searching());
        assert!(controller.state().error_message().is_some());
    }
}
