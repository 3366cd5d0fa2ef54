//! Argument parsing and subcommand logic.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cartaylor::prelude::*;
use cartaylor_config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "cartaylor")]
#[command(version, about = "Configure a vehicle and check it against compatibility rules")]
pub struct Cli {
    /// Settings file; defaults to ./cartaylor.toml when it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog document (JSON, TOML or YAML); overrides `catalog_path`.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List categories with their number of variants.
    Categories,

    /// List the part types of a category with their rules.
    Variants {
        /// Category name, e.g. Engine.
        category: String,
    },

    /// Select parts and report whether the configuration holds.
    Check {
        /// Part reference, `Name` or `Category/Name`. Repeatable.
        #[arg(long = "select", value_name = "PART")]
        select: Vec<String>,

        /// Print the HTML summary instead of the text description.
        #[arg(long)]
        html: bool,
    },
}

/// Runs one subcommand, writing its report to `out`.
///
/// Returns `Ok(false)` when `check` finds an invalid or incomplete
/// configuration; every other successful run returns `Ok(true)`.
pub fn run(cli: &Cli, out: &mut impl Write, color: bool) -> Result<bool> {
    let config = load_config(cli.config.as_deref(), cli.catalog.as_deref())?;
    let mut configurator =
        Configurator::from_config(&config).context("failed to build configurator")?;

    match &cli.command {
        Command::Categories => {
            list_categories(&configurator, out)?;
            Ok(true)
        }
        Command::Variants { category } => {
            list_variants(&configurator, category, out)?;
            Ok(true)
        }
        Command::Check { select, html } => check(&mut configurator, select, *html, out, color),
    }
}

fn load_config(config: Option<&Path>, catalog: Option<&Path>) -> Result<ConfiguratorConfig> {
    let mut settings = match config {
        Some(path) => ConfiguratorConfig::load(path)
            .with_context(|| format!("loading settings {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            ConfiguratorConfig::load(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("loading settings {}", DEFAULT_CONFIG_FILE))?
        }
        None => ConfiguratorConfig::default(),
    };
    if let Some(path) = catalog {
        settings = settings.with_catalog_path(path);
    }
    Ok(settings)
}

fn list_categories(configurator: &Configurator, out: &mut impl Write) -> Result<()> {
    for category in configurator.catalog().iter_categories() {
        let count = configurator.variants(category).len();
        writeln!(out, "{:<14} {} variants", category.name(), count)?;
    }
    Ok(())
}

fn list_variants(
    configurator: &Configurator,
    category: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut variants: Vec<PartType> = configurator
        .variants_by_name(category)?
        .into_iter()
        .collect();
    variants.sort();

    let checker = configurator.compatibility_checker();
    for part_type in &variants {
        writeln!(out, "{:<10} {:>8}", part_type.name(), part_type.price())?;

        let incompatible = qualified_names(checker.incompatibilities(part_type));
        if !incompatible.is_empty() {
            writeln!(out, "    incompatible with: {}", incompatible.join(", "))?;
        }
        let required = qualified_names(checker.requirements(part_type));
        if !required.is_empty() {
            writeln!(out, "    requires: {}", required.join(", "))?;
        }
    }
    Ok(())
}

fn qualified_names(parts: impl IntoIterator<Item = PartType>) -> Vec<String> {
    let mut parts: Vec<PartType> = parts.into_iter().collect();
    parts.sort();
    parts.iter().map(PartType::qualified_name).collect()
}

fn check(
    configurator: &mut Configurator,
    select: &[String],
    html: bool,
    out: &mut impl Write,
    color: bool,
) -> Result<bool> {
    for reference in select {
        configurator
            .select(reference)
            .with_context(|| format!("cannot select '{}'", reference))?;
    }

    if html {
        writeln!(out, "{}", configurator.html_description())?;
        return Ok(configurator.status().is_final());
    }

    write!(out, "{}", configurator.report())?;
    let status = configurator.status();
    writeln!(out, "valid: {}", verdict(status.valid, color))?;
    writeln!(out, "complete: {}", verdict(status.complete, color))?;
    writeln!(out, "total price: {}", status.total_price)?;
    for violation in &status.violations {
        writeln!(out, "  - {}", violation)?;
    }
    for category in &status.missing_categories {
        writeln!(out, "  - no {} selected", category)?;
    }
    Ok(status.is_final())
}

fn verdict(ok: bool, color: bool) -> String {
    match (ok, color) {
        (true, false) => "yes".to_string(),
        (false, false) => "no".to_string(),
        (true, true) => "yes".green().to_string(),
        (false, true) => "no".red().to_string(),
    }
}
