pub mod loader;

use crate::error::{GearForgeError, GfResult};
use crate::optimizer::Build;
use crate::stats::{add_into, StatVector, ZERO_STATS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Engine,
    Exhaust,
    Suspension,
    Gearbox,
    Trinket,
}

impl Category {
    /// Categories that contribute exactly one part to a build.
    pub const SINGLES: [Category; 4] = [
        Category::Engine,
        Category::Exhaust,
        Category::Suspension,
        Category::Gearbox,
    ];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Minimum number of owned parts needed to form a build.
    pub const fn min_owned(self) -> usize {
        match self {
            Category::Trinket => 2,
            _ => 1,
        }
    }

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

/// Dense view of one category: one row per part, one column per `StatKey`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub category: Category,
    names: Vec<String>,
    rows: Vec<StatVector>,
}

impl CategoryTable {
    pub fn new(category: Category, names: Vec<String>, rows: Vec<StatVector>) -> Self {
        debug_assert_eq!(names.len(), rows.len());
        Self {
            category,
            names,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[StatVector] {
        &self.rows
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub fn row(&self, i: usize) -> &StatVector {
        &self.rows[i]
    }

    pub fn part(&self, name: &str) -> Option<&StatVector> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.rows[i])
    }

    /// Rows whose name is in `owned`, in catalog order.
    pub fn filter(&self, owned: &BTreeSet<String>) -> CategoryTable {
        let (names, rows) = self
            .names
            .iter()
            .zip(self.rows.iter())
            .filter(|(n, _)| owned.contains(n.as_str()))
            .map(|(n, r)| (n.clone(), *r))
            .unzip();

        CategoryTable::new(self.category, names, rows)
    }
}

/// The static parts catalog. Built once, then shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tables: [Option<CategoryTable>; Category::COUNT],
}

impl Catalog {
    pub(crate) fn empty() -> Self {
        Self {
            tables: Default::default(),
        }
    }

    pub(crate) fn insert(&mut self, table: CategoryTable) {
        let idx = table.category.idx();
        self.tables[idx] = Some(table);
    }

    pub fn builtin() -> GfResult<Self> {
        loader::load_builtin()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        loader::load_from_file(path)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> GfResult<Self> {
        loader::from_reader(reader)
    }

    pub fn table(&self, category: Category) -> GfResult<&CategoryTable> {
        self.tables[category.idx()].as_ref().ok_or_else(|| {
            GearForgeError::Config(format!("Catalog is missing category {}", category))
        })
    }

    /// Categories with no table at all.
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::all()
            .filter(|c| self.tables[c.idx()].is_none())
            .collect()
    }

    /// Stat row of a named part; unknown names read as all zeros.
    pub fn part_stats(&self, category: Category, name: &str) -> StatVector {
        self.tables[category.idx()]
            .as_ref()
            .and_then(|t| t.part(name))
            .copied()
            .unwrap_or(ZERO_STATS)
    }

    /// Full stat totals of a build. Unknown names contribute nothing.
    pub fn totals_for(&self, build: &Build) -> StatVector {
        let mut totals = ZERO_STATS;
        for (category, name) in build.parts() {
            add_into(&mut totals, &self.part_stats(category, name));
        }
        totals
    }
}
