use crate::reports;
use clap::Args;
use gearforge::catalog::Catalog;
use gearforge::error::GfResult;
use gearforge::inventory::Inventory;
use gearforge::ranges::{self, ScoreRanges};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct RangesArgs {
    /// Print ranges as JSON (`raw` and `padded`)
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct RangesReport {
    raw: ScoreRanges,
    padded: ScoreRanges,
}

pub fn run(args: RangesArgs, catalog: &Catalog, inventory: &Inventory) -> GfResult<()> {
    let raw = ranges::estimate_for_inventory(catalog, inventory)?;

    if args.json {
        let out = RangesReport {
            raw,
            padded: raw.padded(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_ranges(&raw);
    }
    Ok(())
}
