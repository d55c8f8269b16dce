//! `a380fail` - CLI for the A380 failure registry
//!
//! Prints the selectable failure catalog, resolves failure names and checks
//! the failure tables for consistency.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tracing::info;

use a380_failures::cli::{ChaptersCommand, Cli, Command, ConfigCommand, ListCommand, LookupCommand};
use a380_failures::listing::{self, CatalogRow, ListingFilter};
use a380_failures::{a380, init_logging, Chapter, Config, FailureRegistry, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Lookup(cmd) => handle_lookup(&config, &cmd),
        Command::Chapters(cmd) => handle_chapters(&config, &cmd),
        Command::Check => handle_check(),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn registry() -> anyhow::Result<&'static FailureRegistry> {
    a380::try_registry()
        .map_err(|err| anyhow::anyhow!("A380 failure tables are inconsistent: {err}"))
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let filter = ListingFilter {
        chapters: cmd
            .chapter
            .map_or_else(|| config.chapters(), |chapter| vec![Chapter::new(chapter)]),
        include_unselectable: cmd.all || config.catalog.show_unselectable,
    };
    let format = cmd.format.map_or(config.output.format, OutputFormat::from);

    let rows = listing::catalog_rows(registry()?, &filter)?;
    print!("{}", listing::render_rows(&rows, format)?);
    Ok(())
}

fn handle_lookup(config: &Config, cmd: &LookupCommand) -> anyhow::Result<()> {
    let registry = registry()?;
    let identifier = registry.identifier_of(&cmd.name)?;
    let row = CatalogRow::for_identifier(registry, identifier)?;
    let format = cmd.format.map_or(config.output.format, OutputFormat::from);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    println!("Name:        {}", row.name);
    println!("Identifier:  {}", row.identifier);
    println!("Selectable:  {}", if row.selectable { "yes" } else { "no" });
    if let (Some(chapter), Some(label)) = (row.chapter, row.label) {
        println!("Chapter:     {chapter}");
        println!("Label:       {label}");
    }
    Ok(())
}

fn handle_chapters(config: &Config, cmd: &ChaptersCommand) -> anyhow::Result<()> {
    let format = cmd.format.map_or(config.output.format, OutputFormat::from);
    let summaries = listing::chapter_summaries(registry()?);
    print!("{}", listing::render_chapters(&summaries, format)?);
    Ok(())
}

fn handle_check() -> anyhow::Result<()> {
    let registry = registry()?;
    let unselectable: Vec<_> = registry.unselectable().map(|entry| entry.name).collect();

    info!(
        entries = registry.len(),
        definitions = registry.definitions().len(),
        "failure tables are consistent"
    );

    println!("Named failures:       {}", registry.len());
    println!("Catalog definitions:  {}", registry.definitions().len());
    println!("Chapters:             {}", registry.chapters().len());
    println!("Not selectable:       {}", unselectable.len());
    for name in unselectable {
        println!("  {name}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let chapters = if config.catalog.chapters.is_empty() {
                    "all".to_string()
                } else {
                    config
                        .catalog
                        .chapters
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Catalog]");
                println!("  Show unselectable:  {}", config.catalog.show_unselectable);
                println!("  Chapters:           {chapters}");
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_strict(&path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
