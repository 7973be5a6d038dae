use std::path::PathBuf;

use console::style;
use miette::Result;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    let (curdir, config) = super::load_project(config)?;

    println!(
        "{} {}",
        style("Checking project at").bold(),
        style(curdir.display()).cyan()
    );

    println!(
        "  Project: {} (organization {})",
        config.project.project_id, config.project.organization_id
    );
    println!(
        "  Push pattern: {}",
        config.push.pattern.as_deref().unwrap_or("(none)")
    );
    for pattern in config.pull_patterns()? {
        println!(
            "  Pull pattern: {}",
            pattern
                .as_ref()
                .map(|p| p.as_str())
                .unwrap_or(qordoba::pattern::DEFAULT_PULL_PATTERN)
        );
    }
    println!("  Languages: {}", config.languages.len());
    println!(
        "  Formats: {}",
        config
            .content_type_table()
            .formats()
            .map(|(code, _)| code)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut warnings = Vec::new();
    if config.push.pattern.is_none() {
        warnings.push("No [push] pattern configured".to_string());
    }
    if config.languages.is_empty() {
        warnings.push("No [[languages]] cached".to_string());
    }
    if config.project.source_language.is_none() {
        warnings.push("No source_language in [project]".to_string());
    }
    if qordoba::config::access_token(&config)?.is_none() {
        warnings.push("No access token configured".to_string());
    }

    if !warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow().bold());
        for w in &warnings {
            println!("  {} {}", style("⚠").yellow(), w);
        }
    }

    println!("\n{} Config is valid!", style("✓").green().bold());

    Ok(())
}
