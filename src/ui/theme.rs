//! Terminal theme
//!
//! Dark and light palettes for rendered pages, also used for dialoguer
//! prompts.

use clap::ValueEnum;
use console::{Color, Style};
use dialoguer::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::result_card::ScoreTier;

/// Which palette to render with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// 256-color codes for one palette
struct Palette {
    primary: u8,
    text: u8,
    muted: u8,
    success: u8,
    error: u8,
    tier_high: u8,
    tier_medium: u8,
    tier_low: u8,
    link: u8,
}

const DARK: Palette = Palette {
    primary: 117,    // light blue
    text: 252,       // light gray
    muted: 242,      // gray
    success: 114,    // light green
    error: 210,      // light red
    tier_high: 114,
    tier_medium: 220, // gold
    tier_low: 210,
    link: 75,
};

const LIGHT: Palette = Palette {
    primary: 25,
    text: 235,
    muted: 244,
    success: 28,
    error: 160,
    tier_high: 28,
    tier_medium: 136,
    tier_low: 160,
    link: 26,
};

/// Styles used across the front end
pub struct SiteTheme {
    pub title: Style,
    pub heading: Style,
    pub text: Style,
    pub muted: Style,
    pub success: Style,
    pub error: Style,
    pub link: Style,
    pub markup: Style,
    tier_high: Style,
    tier_medium: Style,
    tier_low: Style,
    prompt_prefix: String,
    success_prefix: String,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl SiteTheme {
    pub fn new(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        };
        let fg = |code: u8| Style::new().fg(Color::Color256(code));

        Self {
            title: fg(palette.primary).bold(),
            heading: fg(palette.text).bold(),
            text: fg(palette.text),
            muted: fg(palette.muted),
            success: fg(palette.success),
            error: fg(palette.error),
            link: fg(palette.link).underlined(),
            markup: fg(palette.muted).italic(),
            tier_high: fg(palette.tier_high).bold(),
            tier_medium: fg(palette.tier_medium).bold(),
            tier_low: fg(palette.tier_low).bold(),
            prompt_prefix: "› ".to_string(),
            success_prefix: "✓ ".to_string(),
        }
    }

    /// Color for a result's score
    pub fn tier(&self, tier: ScoreTier) -> &Style {
        match tier {
            ScoreTier::High => &self.tier_high,
            ScoreTier::Medium => &self.tier_medium,
            ScoreTier::Low => &self.tier_low,
        }
    }

    pub fn prompt_prefix(&self) -> &str {
        &self.prompt_prefix
    }
}

impl Theme for SiteTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.title.apply_to(&self.prompt_prefix),
            self.title.apply_to(prompt)
        )
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "{}", self.error.apply_to(err))
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}{}", self.prompt_prefix, self.title.apply_to(prompt))?;
        if let Some(default) = default {
            write!(f, " {}", self.muted.apply_to(format!("[{}]", default)))?;
        }
        write!(f, ": ")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(
            f,
            "{}{}: {}",
            self.success.apply_to(&self.success_prefix),
            self.title.apply_to(prompt),
            self.success.apply_to(sel)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ThemeMode,
        }

        let parsed: Wrapper = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(parsed.theme, ThemeMode::Light);
        assert!(toml::from_str::<Wrapper>("theme = \"neon\"").is_err());
    }

    #[test]
    fn test_input_prompt_format() {
        let theme = SiteTheme::new(ThemeMode::Light);
        let mut out = String::new();
        theme
            .format_input_prompt(&mut out, "Website URL", None)
            .unwrap();

        let plain = console::strip_ansi_codes(&out);
        assert_eq!(plain, "› Website URL: ");
    }
}
