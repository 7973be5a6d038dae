use std::path::PathBuf;

use console::style;
use miette::Result;

use qordoba::push::{plan_push, PushOptions};

pub fn run(config: Option<PathBuf>, files: Vec<PathBuf>, skip_unsupported: bool) -> Result<()> {
    let (curdir, config) = super::load_project(config)?;
    let registry = config.registry();
    let table = config.content_type_table();

    let plan = plan_push(
        &curdir,
        &config,
        &registry,
        &table,
        &files,
        &PushOptions { skip_unsupported },
    )?;

    for item in &plan.items {
        println!(
            "  {} {} {} {}",
            style(item.file.posix_path()).cyan(),
            style(&item.file.language().code).green(),
            style(&item.content_type).dim(),
            item.unique_name
        );
    }

    for (file, err) in &plan.skipped {
        println!(
            "  {} {} {}",
            style("skip").yellow(),
            file.posix_path(),
            style(err).dim()
        );
    }

    println!(
        "\n{} file(s) to push, {} skipped",
        plan.items.len(),
        plan.skipped.len()
    );

    Ok(())
}
