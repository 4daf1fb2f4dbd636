use crate::catalog::{Catalog, Category, CategoryTable};
use crate::error::{GearForgeError, GfResult};
use crate::stats::{StatKey, ZERO_STATS};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Equipment table scraped from the game wiki.
const BUILTIN_CATALOG: &str = include_str!("../../data/parts.json");

#[derive(Debug, Clone, Deserialize)]
pub struct RawPart {
    pub name: String,
    #[serde(default)]
    pub stats: BTreeMap<String, f32>,
}

/// Catalog exactly as it appears on disk: category tag -> parts.
pub type RawCatalog = BTreeMap<String, Vec<RawPart>>;

pub fn load_builtin() -> GfResult<Catalog> {
    from_reader(BUILTIN_CATALOG.as_bytes())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Catalog> {
    let path = path.as_ref();
    debug!("Loading catalog from: {}", path.display());
    let file = File::open(path).map_err(|e| {
        GearForgeError::Config(format!(
            "Could not open catalog at '{}': {}",
            path.display(),
            e
        ))
    })?;
    from_reader(BufReader::new(file))
}

pub fn from_reader<R: Read>(reader: R) -> GfResult<Catalog> {
    let raw: RawCatalog = serde_json::from_reader(reader)?;
    from_raw(raw)
}

pub fn from_raw(raw: RawCatalog) -> GfResult<Catalog> {
    let mut catalog = Catalog::empty();
    let mut ignored_keys = 0usize;

    for (tag, parts) in raw {
        let category = Category::from_str(&tag)
            .map_err(|_| GearForgeError::Config(format!("Unknown category '{}'", tag)))?;

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(parts.len());
        let mut rows = Vec::with_capacity(parts.len());

        for part in parts {
            if !seen.insert(part.name.clone()) {
                return Err(GearForgeError::Config(format!(
                    "Duplicate part '{}' in {}",
                    part.name, category
                )));
            }

            let mut row = ZERO_STATS;
            for (key, value) in &part.stats {
                match StatKey::from_str(key) {
                    Ok(k) => row[k.idx()] = *value,
                    Err(_) => ignored_keys += 1,
                }
            }
            names.push(part.name);
            rows.push(row);
        }

        debug!("   -> {}: {} parts", category, names.len());
        catalog.insert(CategoryTable::new(category, names, rows));
    }

    if ignored_keys > 0 {
        debug!("   Ignored {} stat entries with unknown keys.", ignored_keys);
    }

    Ok(catalog)
}
