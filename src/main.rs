use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gearforge::catalog::Catalog;
use gearforge::error::GfResult;
use gearforge::inventory::Inventory;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Parts catalog JSON. Defaults to the built-in equipment table.
    #[arg(global = true, short, long)]
    catalog: Option<String>,

    /// Owned parts JSON. Defaults to owning every part.
    #[arg(global = true, short, long)]
    inventory: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the best builds for the inventory
    Optimize(cmd::optimize::OptimizeArgs),
    /// Show the achievable range of each main score
    Ranges(cmd::ranges::RangesArgs),
    /// List the catalog
    Parts(cmd::parts::PartsArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: &Option<String>) -> GfResult<Catalog> {
    let catalog = match path {
        Some(p) => {
            info!("📂 Loading Catalog: {}", p);
            Catalog::load_from_file(p)?
        }
        None => Catalog::builtin()?,
    };

    let missing = catalog.missing_categories();
    if !missing.is_empty() {
        warn!("⚠️  Catalog is missing categories: {:?}", missing);
    }
    Ok(catalog)
}

fn load_inventory(path: &Option<String>, catalog: &Catalog) -> GfResult<Inventory> {
    match path {
        Some(p) => {
            info!("🎒 Loading Inventory: {}", p);
            Inventory::load_from_file(p)
        }
        None => {
            info!("🎒 No inventory given. Assuming every part is owned.");
            Ok(Inventory::all_owned(catalog))
        }
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> GfResult<()> {
    let catalog = load_catalog(&cli.catalog)?;

    match cli.command {
        Commands::Optimize(args) => {
            let inventory = load_inventory(&cli.inventory, &catalog)?;
            cmd::optimize::run(
                args,
                matches.subcommand_matches("optimize"),
                &catalog,
                &inventory,
            )
        }
        Commands::Ranges(args) => {
            let inventory = load_inventory(&cli.inventory, &catalog)?;
            cmd::ranges::run(args, &catalog, &inventory)
        }
        Commands::Parts(args) => cmd::parts::run(args, &catalog),
    }
}

fn main() {
    // Raw matches tell user input apart from defaults when merging configs.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    info!("🚀 Initializing GearForge...");

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
