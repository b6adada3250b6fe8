//! Page rendering
//!
//! Pure functions from [`PageState`] to text. Nothing here mutates state.

use crate::backend::IndexReceipt;
use crate::core::PageState;

use super::theme::SiteTheme;

/// Full page: both inputs, both controls, error slot and results.
pub fn render_page(state: &PageState, theme: &SiteTheme) -> String {
    let mut lines = vec![
        theme.title.apply_to("🔍 Website Semantic Search").to_string(),
        String::new(),
        input_line("URL:  ", &state.url_input, "Enter website URL to index", theme),
        format!(
            "{}  {}",
            button(
                if state.is_indexing() { "Indexing..." } else { "Index Website" },
                state.is_indexing(),
                theme
            ),
            indexed_badge(state, theme).unwrap_or_default()
        ),
        String::new(),
        input_line("Query:", &state.query_input, "Enter your search query", theme),
        button(
            if state.is_searching() { "Searching..." } else { "Search" },
            state.is_searching(),
            theme,
        ),
    ];

    let outcome = render_outcome(state, theme);
    if !outcome.is_empty() {
        lines.push(String::new());
        lines.push(outcome);
    }

    lines.join("\n")
}

/// Error slot plus results, without the inputs. Empty when there is
/// nothing to report.
pub fn render_outcome(state: &PageState, theme: &SiteTheme) -> String {
    let mut sections = Vec::new();

    if let Some(message) = state.error_message() {
        sections.push(theme.error.apply_to(message).to_string());
    }

    if !state.cards().is_empty() {
        let mut lines = vec![theme.heading.apply_to("Top Results").to_string()];
        for (index, card) in state.cards().iter().enumerate() {
            lines.push(String::new());
            lines.push(card.render(index, theme));
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

/// "✅ Indexed" plus whatever the backend reported, if indexing succeeded.
pub fn indexed_badge(state: &PageState, theme: &SiteTheme) -> Option<String> {
    if !state.is_indexed() {
        return None;
    }

    let mut badge = theme.success.apply_to("✅ Indexed").to_string();
    if let Some(detail) = state.receipt().and_then(receipt_detail) {
        badge.push(' ');
        badge.push_str(&theme.muted.apply_to(detail).to_string());
    }
    Some(badge)
}

fn receipt_detail(receipt: &IndexReceipt) -> Option<String> {
    match receipt.chunks_indexed {
        Some(1) => Some("(1 new chunk)".to_string()),
        Some(count) => Some(format!("({} new chunks)", count)),
        None => None,
    }
}

fn input_line(label: &str, value: &str, placeholder: &str, theme: &SiteTheme) -> String {
    let value = if value.is_empty() {
        theme.muted.apply_to(placeholder).to_string()
    } else {
        theme
            .text
            .apply_to(super::result_card::literal(value))
            .to_string()
    };
    format!("{} {}", theme.heading.apply_to(label), value)
}

fn button(label: &str, disabled: bool, theme: &SiteTheme) -> String {
    let text = format!("[ {} ]", label);
    if disabled {
        theme.muted.apply_to(text).to_string()
    } else {
        theme.link.apply_to(text).to_string()
    }
}
