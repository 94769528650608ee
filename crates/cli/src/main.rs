use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use palpath_breeding::{BreedingContext, BreedingPath, SearchLimits};
use palpath_catalog::{Catalog, Pal, PalSearch};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "palpath")]
#[command(about = "Pal breeding resolution and path search", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot JSON file with the pal roster and unique breedings
    #[arg(long, global = true, default_value = "data/pals.sample.json")]
    data: PathBuf,

    /// Emit JSON on stdout instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the offspring of two parents
    Resolve { parent1: String, parent2: String },

    /// Find breeding routes from a start pal to a target pal
    Paths {
        start: String,
        target: String,

        /// Stop after this many routes
        #[arg(long, default_value_t = 5)]
        max_paths: usize,

        /// Give up beyond this many generations
        #[arg(long, default_value_t = 10)]
        max_depth: usize,

        /// Partners followed per child while expanding (branching cap)
        #[arg(long, default_value_t = 3)]
        partner_cap: usize,
    },

    /// Group one pal's breeding outcomes by resulting child
    Options { parent: String },

    /// List every parent pair that produces a child
    Combos { child: String },

    /// Fuzzy-search the roster by id or name
    Search {
        query: String,

        /// Include pals excluded from breeding
        #[arg(long)]
        all: bool,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Dump the roster
    List {
        /// Restrict to pals that can take part in breeding
        #[arg(long)]
        breedable: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    // stdout is reserved for command output, JSON in particular.
    builder.target(env_logger::Target::Stderr).init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    log::debug!("Reading snapshot {}", cli.data.display());
    let bytes = fs::read(&cli.data)
        .with_context(|| format!("Failed to read snapshot {}", cli.data.display()))?;
    let catalog = Catalog::from_json_slice(&bytes)
        .with_context(|| format!("Failed to load snapshot {}", cli.data.display()))?;
    let ctx = BreedingContext::new(catalog);

    match cli.command {
        Commands::Resolve { parent1, parent2 } => cmd_resolve(&ctx, cli.json, &parent1, &parent2),
        Commands::Paths {
            start,
            target,
            max_paths,
            max_depth,
            partner_cap,
        } => {
            let limits = SearchLimits {
                max_paths,
                max_depth,
                partners_per_child: partner_cap,
            };
            cmd_paths(&ctx, cli.json, &start, &target, limits)
        }
        Commands::Options { parent } => cmd_options(&ctx, cli.json, &parent),
        Commands::Combos { child } => cmd_combos(&ctx, cli.json, &child),
        Commands::Search { query, all, limit } => cmd_search(&ctx, cli.json, &query, all, limit),
        Commands::List { breedable } => cmd_list(&ctx, cli.json, breedable),
    }
}

/// Unknown ids are a caller error at this layer; the core itself only
/// reports them as absence.
fn require_known(ctx: &BreedingContext, ids: &[&str]) -> Option<ExitCode> {
    for id in ids {
        if ctx.catalog().get(id).is_none() {
            eprintln!("Unknown pal id: {id}");
            return Some(ExitCode::FAILURE);
        }
    }
    None
}

fn label(ctx: &BreedingContext, id: &str) -> String {
    match ctx.catalog().get(id) {
        Some(pal) => format!("{} ({})", pal.name_en, id),
        None => id.to_string(),
    }
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    parent1: &'a str,
    parent2: &'a str,
    child: Option<String>,
}

fn cmd_resolve(ctx: &BreedingContext, json: bool, parent1: &str, parent2: &str) -> Result<ExitCode> {
    if let Some(code) = require_known(ctx, &[parent1, parent2]) {
        return Ok(code);
    }

    let child = ctx.resolve_child(parent1, parent2);

    if json {
        let output = ResolveOutput {
            parent1,
            parent2,
            child,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &child {
            Some(id) => println!(
                "{} + {} -> {}",
                label(ctx, parent1),
                label(ctx, parent2),
                label(ctx, id)
            ),
            None => println!(
                "{} + {} -> no offspring",
                label(ctx, parent1),
                label(ctx, parent2)
            ),
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct PathsOutput<'a> {
    start: &'a str,
    target: &'a str,
    paths: Vec<BreedingPath>,
}

fn cmd_paths(
    ctx: &BreedingContext,
    json: bool,
    start: &str,
    target: &str,
    limits: SearchLimits,
) -> Result<ExitCode> {
    if let Some(code) = require_known(ctx, &[start, target]) {
        return Ok(code);
    }

    let paths = ctx.find_paths(start, target, limits);

    if json {
        let output = PathsOutput {
            start,
            target,
            paths,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    if paths.is_empty() {
        println!(
            "No breeding route from {} to {} within {} generations",
            label(ctx, start),
            label(ctx, target),
            limits.max_depth
        );
        return Ok(ExitCode::SUCCESS);
    }

    for (pos, path) in paths.iter().enumerate() {
        if path.steps.is_empty() {
            println!("Path {}: already {}", pos + 1, label(ctx, target));
            continue;
        }
        println!("Path {} ({} generations):", pos + 1, path.depth);
        for step in &path.steps {
            println!(
                "  {} + {} -> {}",
                label(ctx, &step.from),
                label(ctx, &step.partner),
                label(ctx, &step.result)
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_options(ctx: &BreedingContext, json: bool, parent: &str) -> Result<ExitCode> {
    if let Some(code) = require_known(ctx, &[parent]) {
        return Ok(code);
    }

    let options = ctx.options_for_parent(parent);

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else if options.is_empty() {
        println!("{} has no breeding outcomes", label(ctx, parent));
    } else {
        for group in &options {
            println!(
                "{} <- partners: {}",
                label(ctx, &group.child),
                group.partners.join(", ")
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_combos(ctx: &BreedingContext, json: bool, child: &str) -> Result<ExitCode> {
    if let Some(code) = require_known(ctx, &[child]) {
        return Ok(code);
    }

    let pairs = ctx.combinations_for_child(child);

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else if pairs.is_empty() {
        println!("Nothing breeds into {}", label(ctx, child));
    } else {
        for pair in &pairs {
            println!(
                "{} + {} -> {}",
                label(ctx, &pair.parent1),
                label(ctx, &pair.parent2),
                label(ctx, child)
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_search(
    ctx: &BreedingContext,
    json: bool,
    query: &str,
    all: bool,
    limit: usize,
) -> Result<ExitCode> {
    let mut search = PalSearch::new();
    let results = search.search(ctx.catalog(), query, !all, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_roster(&results);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_list(ctx: &BreedingContext, json: bool, breedable: bool) -> Result<ExitCode> {
    let pals: Vec<&Pal> = if breedable {
        ctx.catalog().breedable().collect()
    } else {
        ctx.catalog().pals().iter().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&pals)?);
    } else {
        print_roster(&pals);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_roster(pals: &[&Pal]) {
    for pal in pals {
        let flag = if pal.ignore_combi { "  [no breeding]" } else { "" };
        println!(
            "{}  {}  power {}{}",
            pal.id, pal.name_en, pal.breeding_power, flag
        );
    }
}
