pub mod enumeration;
pub mod selection;

use self::enumeration::{pair_count, trinket_pairs, CrossProduct};
use crate::catalog::{Catalog, Category};
use crate::config::{OptimizeConfig, ScoreBound};
use crate::error::GfResult;
use crate::inventory::{EligibleParts, Inventory};
use crate::scorer::{self, MainScore, MainScores, ScoreBatch};
use crate::stats::{sum2, StatKey, StatVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One ranked combination. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub objective: f32,
    pub race: f32,
    pub coin: f32,
    pub drift: f32,
    pub combat: f32,
    #[serde(rename = "ENGINE")]
    pub engine: String,
    #[serde(rename = "EXHAUST")]
    pub exhaust: String,
    #[serde(rename = "SUSPENSION")]
    pub suspension: String,
    #[serde(rename = "GEARBOX")]
    pub gearbox: String,
    #[serde(rename = "TRINKET_1")]
    pub trinket_1: String,
    #[serde(rename = "TRINKET_2")]
    pub trinket_2: String,
}

impl Build {
    pub fn scores(&self) -> MainScores {
        MainScores {
            race: self.race,
            coin: self.coin,
            drift: self.drift,
            combat: self.combat,
        }
    }

    /// The six parts with the category each was drawn from.
    pub fn parts(&self) -> [(Category, &str); 6] {
        [
            (Category::Engine, self.engine.as_str()),
            (Category::Exhaust, self.exhaust.as_str()),
            (Category::Suspension, self.suspension.as_str()),
            (Category::Gearbox, self.gearbox.as_str()),
            (Category::Trinket, self.trinket_1.as_str()),
            (Category::Trinket, self.trinket_2.as_str()),
        ]
    }

    pub(crate) fn identity_key(&self) -> [String; 6] {
        [
            self.engine.clone(),
            self.exhaust.clone(),
            self.suspension.clone(),
            self.gearbox.clone(),
            self.trinket_1.clone(),
            self.trinket_2.clone(),
        ]
    }

    /// Full stat totals of this build, recomputed from the catalog.
    pub fn totals(&self, catalog: &Catalog) -> StatVector {
        catalog.totals_for(self)
    }
}

pub struct Optimizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Optimizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Best distinct builds for the inventory, best first. An empty list means
    /// nothing satisfied the constraints.
    pub fn optimize(&self, inventory: &Inventory, config: &OptimizeConfig) -> GfResult<Vec<Build>> {
        config.validate()?;
        let parts = EligibleParts::resolve(self.catalog, inventory)?;
        Ok(optimize_parts(&parts, config))
    }
}

/// Objective terms resolved once per run.
struct Objective {
    main: Vec<(MainScore, f32)>,
    raw: Vec<(StatKey, f32)>,
    constraints: Vec<(MainScore, ScoreBound)>,
}

impl Objective {
    fn from_config(config: &OptimizeConfig) -> Self {
        Self {
            main: config.effective_main_weights(),
            raw: config.resolved_raw_weights(),
            constraints: config.active_constraints(),
        }
    }

    fn mask(&self, scores: &ScoreBatch) -> Vec<bool> {
        let mut keep = vec![true; scores.len()];
        for (score, bound) in &self.constraints {
            for (k, v) in keep.iter_mut().zip(scores.column(*score)) {
                *k &= bound.contains(*v);
            }
        }
        keep
    }

    fn evaluate(&self, totals: &[StatVector], scores: &ScoreBatch, keep: &[bool]) -> Vec<f32> {
        let mut obj = vec![0.0f32; totals.len()];
        for (score, w) in &self.main {
            for (o, v) in obj.iter_mut().zip(scores.column(*score)) {
                *o += w * v;
            }
        }
        for (key, w) in &self.raw {
            for (o, t) in obj.iter_mut().zip(totals) {
                *o += w * t[key.idx()];
            }
        }
        for (o, k) in obj.iter_mut().zip(keep) {
            if !k {
                *o = f32::NEG_INFINITY;
            }
        }
        obj
    }
}

/// Exhaustive search over already-validated eligible parts.
pub fn optimize_parts(parts: &EligibleParts, config: &OptimizeConfig) -> Vec<Build> {
    let top_n = config.top_n;
    let objective = Objective::from_config(config);

    let cross = CrossProduct::build(parts.singles());
    let pairs: Vec<(usize, usize)> = trinket_pairs(parts.trinket.len()).collect();
    debug!(
        "Enumerating {} base combos {:?} x {} trinket pairs",
        cross.len(),
        cross.dims(),
        pair_count(parts.trinket.len())
    );

    let per_pair: Vec<Vec<Build>> = pairs
        .par_iter()
        .map(|&(a, b)| score_pair(parts, &cross, &objective, (a, b), top_n))
        .collect();

    let candidates: Vec<Build> = per_pair.into_iter().flatten().collect();
    debug!("Collected {} candidates before merge", candidates.len());

    selection::merge_candidates(candidates, top_n)
}

/// Score every base combo against one trinket pair and keep its best `top_n`.
fn score_pair(
    parts: &EligibleParts,
    cross: &CrossProduct,
    objective: &Objective,
    (a, b): (usize, usize),
    top_n: usize,
) -> Vec<Build> {
    let trinkets = &parts.trinket;
    let pair_stats = sum2(trinkets.row(a), trinkets.row(b));

    let totals: Vec<StatVector> = cross
        .rows()
        .iter()
        .map(|base| sum2(base, &pair_stats))
        .collect();
    let scores = scorer::score_batch(&totals);

    let keep = objective.mask(&scores);
    if !keep.contains(&true) {
        return Vec::new();
    }

    let obj = objective.evaluate(&totals, &scores, &keep);
    let chosen = selection::top_k(&obj, &keep, top_n);

    chosen
        .into_iter()
        .map(|row| {
            let [e, x, s, g] = cross.decode(row);
            let sc = scores.at(row);
            Build {
                objective: obj[row],
                race: sc.race,
                coin: sc.coin,
                drift: sc.drift,
                combat: sc.combat,
                engine: parts.engine.name(e).to_string(),
                exhaust: parts.exhaust.name(x).to_string(),
                suspension: parts.suspension.name(s).to_string(),
                gearbox: parts.gearbox.name(g).to_string(),
                trinket_1: trinkets.name(a).to_string(),
                trinket_2: trinkets.name(b).to_string(),
            }
        })
        .collect()
}
