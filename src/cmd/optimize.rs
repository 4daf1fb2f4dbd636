use crate::reports;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use gearforge::catalog::Catalog;
use gearforge::config::{
    parse_assignment, parse_main_score, parse_weight, OptimizeConfig, Priority, ScoreBound,
    DEFAULT_TOP_N,
};
use gearforge::error::GfResult;
use gearforge::inventory::Inventory;
use gearforge::optimizer::Optimizer;
use gearforge::scorer::MainScore;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// How many builds to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    #[arg(long, value_enum, default_value_t = Priority::Medium)]
    pub race: Priority,
    #[arg(long, value_enum, default_value_t = Priority::Low)]
    pub coin: Priority,
    #[arg(long, value_enum, default_value_t = Priority::Low)]
    pub drift: Priority,
    #[arg(long, value_enum, default_value_t = Priority::Low)]
    pub combat: Priority,

    /// Exact main-score weight, e.g. `race=2.5`. Wins over the priority flags.
    #[arg(long = "weight", value_name = "SCORE=WEIGHT")]
    pub weights: Vec<String>,

    /// Raw stat in the objective, e.g. `TrickSpd=high` or `T1=0.5`
    #[arg(long = "raw", value_name = "STAT=WEIGHT")]
    pub raw: Vec<String>,

    /// Allowed range of a main score, e.g. `coin=0:` or `race=10:40`
    #[arg(long = "constrain", value_name = "SCORE=LO:HI")]
    pub constraints: Vec<String>,

    /// Keep every main score at or above zero
    #[arg(long, default_value_t = false)]
    pub above_zero: bool,

    /// JSON config used as the base; explicit flags override it
    #[arg(long)]
    pub config: Option<String>,

    /// Write the results to a CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Print results as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show the stat summary of the best build
    #[arg(long, default_value_t = false)]
    pub details: bool,
}

impl OptimizeArgs {
    /// Build the run config. With `--config`, only flags typed on the command
    /// line replace file values.
    pub fn resolve_config(&self, matches: Option<&ArgMatches>) -> GfResult<OptimizeConfig> {
        let (mut config, from_file) = match &self.config {
            Some(path) => {
                info!("⚖️  Loading config from: {}", path);
                (OptimizeConfig::load_from_file(path)?, true)
            }
            None => (OptimizeConfig::default(), false),
        };

        let explicit = |id: &str| {
            !from_file
                || matches.map_or(true, |m| {
                    m.value_source(id) == Some(ValueSource::CommandLine)
                })
        };

        if explicit("top_n") {
            config.top_n = self.top_n;
        }

        let levels = [
            (MainScore::Race, self.race, "race"),
            (MainScore::Coin, self.coin, "coin"),
            (MainScore::Drift, self.drift, "drift"),
            (MainScore::Combat, self.combat, "combat"),
        ];
        for (score, level, id) in levels {
            if explicit(id) {
                config.weights_main.insert(score, level.weight());
            }
        }

        for expr in &self.weights {
            let (name, value) = parse_assignment(expr)?;
            config
                .weights_main
                .insert(parse_main_score(&name)?, parse_weight(&value)?);
        }

        for expr in &self.raw {
            let (name, value) = parse_assignment(expr)?;
            config.weights_raw.insert(name, parse_weight(&value)?);
        }

        if self.above_zero {
            config.keep_above_zero();
        }

        for expr in &self.constraints {
            let (name, value) = parse_assignment(expr)?;
            config
                .constraints_main
                .insert(parse_main_score(&name)?, value.parse::<ScoreBound>()?);
        }

        Ok(config)
    }
}

pub fn run(
    args: OptimizeArgs,
    matches: Option<&ArgMatches>,
    catalog: &Catalog,
    inventory: &Inventory,
) -> GfResult<()> {
    let config = args.resolve_config(matches)?;
    info!(
        "🔎 Optimizing: top {} | weights {:?} | raw {:?} | constraints {}",
        config.top_n,
        config.weights_main,
        config.weights_raw,
        config.active_constraints().len()
    );

    let start = Instant::now();
    let builds = Optimizer::new(catalog).optimize(inventory, &config)?;
    info!(
        "Found {} builds in {:.2}s",
        builds.len(),
        start.elapsed().as_secs_f32()
    );

    if builds.is_empty() {
        warn!("No builds matched your constraints. Relax conditions or select more parts.");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&builds)?);
    } else if !builds.is_empty() {
        reports::print_builds(&builds);
    }

    if args.details {
        if let Some(best) = builds.first() {
            reports::print_stat_summary("STATS SUMMARY", &best.totals(catalog));
        }
    }

    if let Some(path) = &args.csv {
        reports::export_csv(path, &builds)?;
        info!("💾 Saved {} builds to {}", builds.len(), path);
    }

    Ok(())
}
