//! `herald channels`: list the transports the registry can build.

use anyhow::Result;
use colored::Colorize;

use herald_channels::CHANNELS;
use herald_core::config::{get_config_path, load_config};

/// `herald channels`
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "Herald channels".cyan().bold());
    println!();

    for spec in CHANNELS {
        let marker = if spec.name.eq_ignore_ascii_case(&config.dispatch.default_channel) {
            "(default)".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<10} {:<10} {:<16} {}",
            spec.name.bold(),
            spec.display_name,
            spec.destination_hint.dimmed(),
            marker
        );
    }

    println!();
    println!(
        "  {:<10} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".dimmed().to_string()
        }
    );
    println!();
    Ok(())
}
