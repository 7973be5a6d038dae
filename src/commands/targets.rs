use std::path::PathBuf;

use console::style;
use miette::Result;

use qordoba::pattern::resolve_destination_path;
use qordoba::pull::select_languages;

pub fn run(
    config: Option<PathBuf>,
    name: String,
    languages: Vec<String>,
) -> Result<()> {
    let (curdir, config) = super::load_project(config)?;
    let registry = config.registry();
    let destination = config.destination_languages(&registry)?;
    let languages = select_languages(&registry, &languages, &destination)?;

    for pattern in config.pull_patterns()? {
        let label = pattern
            .as_ref()
            .map(|p| p.as_str())
            .unwrap_or(qordoba::pattern::DEFAULT_PULL_PATTERN);
        println!("{} {}", style("==>").cyan().bold(), style(label).bold());

        for language in &languages {
            let file = resolve_destination_path(
                &curdir,
                language,
                pattern.as_ref().map(|p| p.as_str()),
                Some(name.as_str()),
                None,
            )?;

            let marker = if file.full_path().exists() {
                style("exists").yellow()
            } else {
                style("new").green()
            };
            println!(
                "  {:<8} {} {}",
                language.code,
                file.posix_path(),
                marker
            );
        }
    }

    Ok(())
}
