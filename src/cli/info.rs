//! Info command - show where the front end points and reads from

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub fn run(config: &Config, config_file: &Path) -> Result<()> {
    println!("site-search v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("System Information:");
    println!("  OS: {} {}", std::env::consts::OS, std::env::consts::ARCH);

    println!();
    println!("Configuration:");
    println!("  Config file: {}", config_file.display());
    println!("  Theme: {:?}", config.general.theme);

    println!();
    println!("Backend:");
    println!("  Base URL: {}", config.backend.base_url);
    println!("  Index endpoint: POST {}/index", trimmed(&config.backend.base_url));
    println!("  Search endpoint: POST {}/search", trimmed(&config.backend.base_url));

    Ok(())
}

fn trimmed(url: &str) -> &str {
    url.trim_end_matches('/')
}
