//! Result card: one ranked search hit

use std::borrow::Cow;

use super::theme::SiteTheme;
use crate::backend::SearchResult;

/// Display bucket for a score. Only affects color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A search result plus the card's own "View HTML" toggle.
#[derive(Debug, Clone)]
pub struct ResultCard {
    result: SearchResult,
    show_html: bool,
}

impl ResultCard {
    pub fn new(result: SearchResult) -> Self {
        Self {
            result,
            show_html: false,
        }
    }

    pub fn is_html_shown(&self) -> bool {
        self.show_html
    }

    pub fn toggle_html(&mut self) {
        self.show_html = !self.show_html;
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.result.score)
    }

    pub fn score_label(&self) -> String {
        format!("{:.1}% match", self.result.score)
    }

    fn toggle_label(&self) -> &'static str {
        if self.show_html {
            "Hide HTML"
        } else {
            "View HTML"
        }
    }

    /// Render the card; `index` is the zero-based rank.
    pub fn render(&self, index: usize, theme: &SiteTheme) -> String {
        let section = match self.result.section.as_str() {
            "" => "Untitled Section",
            section => section,
        };
        let path = match self.result.path.as_str() {
            "" => "/",
            path => path,
        };

        let mut lines = vec![
            format!(
                "{} {}",
                theme.heading.apply_to(format!("Result #{}:", index + 1)),
                theme.text.apply_to(literal(section))
            ),
            theme.muted.apply_to(format!("Path: {}", literal(path))).to_string(),
        ];

        for line in self.result.content.lines() {
            lines.push(theme.text.apply_to(literal(line)).to_string());
        }

        lines.push(format!(
            "{}  {}",
            theme.tier(self.tier()).apply_to(self.score_label()),
            theme.link.apply_to(self.toggle_label())
        ));

        if self.show_html {
            for line in self.result.html.lines() {
                lines.push(format!(
                    "  {} {}",
                    theme.muted.apply_to("│"),
                    theme.markup.apply_to(literal(line))
                ));
            }
        }

        lines.join("\n")
    }
}

/// Escape control characters so backend text is shown, never interpreted
/// by the terminal.
pub fn literal(text: &str) -> Cow<'_, str> {
    let is_unsafe = |c: char| c.is_control() && c != '\t';

    if !text.chars().any(is_unsafe) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_unsafe(c) {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}
