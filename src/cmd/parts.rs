use crate::reports;
use clap::Args;
use gearforge::catalog::{Catalog, Category};
use gearforge::error::GfResult;

#[derive(Args, Debug, Clone)]
pub struct PartsArgs {
    /// Only list this category
    #[arg(long)]
    pub category: Option<Category>,
}

pub fn run(args: PartsArgs, catalog: &Catalog) -> GfResult<()> {
    match args.category {
        Some(category) => reports::print_parts(catalog.table(category)?),
        None => {
            for category in Category::all() {
                reports::print_parts(catalog.table(category)?);
            }
        }
    }
    Ok(())
}
