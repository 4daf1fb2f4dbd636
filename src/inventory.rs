use crate::catalog::{Catalog, Category, CategoryTable};
use crate::error::{GearForgeError, GfResult};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Owned part names per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    owned: BTreeMap<Category, BTreeSet<String>>,
}

/// Category tags are matched the same way the catalog loader matches them.
impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, BTreeSet<String>>::deserialize(deserializer)?;
        let mut inv = Inventory::new();
        for (tag, names) in raw {
            let category = Category::from_str(&tag)
                .map_err(|_| D::Error::custom(format!("Unknown category '{}'", tag)))?;
            inv.extend(category, names);
        }
        Ok(inv)
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything in the catalog is owned.
    pub fn all_owned(catalog: &Catalog) -> Self {
        let mut inv = Self::new();
        for category in Category::all() {
            if let Ok(table) = catalog.table(category) {
                inv.extend(category, table.names().iter().cloned());
            }
        }
        inv
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GearForgeError::Config(format!(
                "Could not read inventory at '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn insert(&mut self, category: Category, name: impl Into<String>) -> &mut Self {
        self.owned.entry(category).or_default().insert(name.into());
        self
    }

    pub fn extend<I, S>(&mut self, category: Category, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.owned.entry(category).or_default();
        set.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn owned(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.owned.get(&category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.owned.get(&category).map_or(0, |s| s.len())
    }
}

/// Catalog tables restricted to an inventory; every category satisfies its
/// minimum part count.
#[derive(Debug, Clone)]
pub struct EligibleParts {
    pub engine: CategoryTable,
    pub exhaust: CategoryTable,
    pub suspension: CategoryTable,
    pub gearbox: CategoryTable,
    pub trinket: CategoryTable,
}

impl EligibleParts {
    pub fn resolve(catalog: &Catalog, inventory: &Inventory) -> GfResult<Self> {
        let empty = BTreeSet::new();
        let pick = |category: Category| -> GfResult<CategoryTable> {
            let owned = inventory.owned(category).unwrap_or(&empty);
            let table = catalog.table(category)?.filter(owned);

            if table.len() < owned.len() {
                let unknown: Vec<&str> = owned
                    .iter()
                    .filter(|n| !table.names().contains(*n))
                    .map(String::as_str)
                    .collect();
                warn!(
                    "Ignoring {} owned {} not in catalog: {}",
                    unknown.len(),
                    category,
                    unknown.join(", ")
                );
            }

            let required = category.min_owned();
            if table.len() < required {
                return Err(GearForgeError::Validation(if required == 1 {
                    format!("No selected parts in {}. Select at least 1.", category)
                } else {
                    format!(
                        "Select at least {} parts in {} (duplicates are not allowed), found {}.",
                        required,
                        category,
                        table.len()
                    )
                }));
            }
            Ok(table)
        };

        Ok(Self {
            engine: pick(Category::Engine)?,
            exhaust: pick(Category::Exhaust)?,
            suspension: pick(Category::Suspension)?,
            gearbox: pick(Category::Gearbox)?,
            trinket: pick(Category::Trinket)?,
        })
    }

    /// The four single-slot tables, in cross-product order.
    pub fn singles(&self) -> [&CategoryTable; 4] {
        [&self.engine, &self.exhaust, &self.suspension, &self.gearbox]
    }
}
