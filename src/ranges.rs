//! Achievable min/max of each main score for a set of eligible parts.
//!
//! Every main score is linear in the stat totals, and the totals are a sum of
//! independently chosen slots. The extremes of each score therefore follow from
//! per-slot, per-key extremes without walking the full cross product. The
//! trinket slot is the exception: its extremes are taken over real pairs of
//! distinct trinkets.

use crate::catalog::{Catalog, CategoryTable};
use crate::error::GfResult;
use crate::inventory::{EligibleParts, Inventory};
use crate::optimizer::enumeration::trinket_pairs;
use crate::scorer::coeffs::{self, Coeffs};
use crate::scorer::MainScore;
use crate::stats::{StatKey, StatVector, ZERO_STATS};
use serde::Serialize;

/// Slider padding never drops below this.
pub const MIN_PAD: f32 = 1.0;
/// Padding as a share of the raw span.
pub const PAD_FRACTION: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    pub lo: f32,
    pub hi: f32,
}

impl ScoreRange {
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.lo && v <= self.hi
    }

    /// Widened copy for UI sliders.
    pub fn padded(&self) -> ScoreRange {
        let pad = if self.hi > self.lo {
            (PAD_FRACTION * self.span()).max(MIN_PAD)
        } else {
            MIN_PAD
        };
        ScoreRange {
            lo: self.lo - pad,
            hi: self.hi + pad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRanges {
    pub race: ScoreRange,
    pub coin: ScoreRange,
    pub drift: ScoreRange,
    pub combat: ScoreRange,
}

impl ScoreRanges {
    pub fn get(&self, score: MainScore) -> ScoreRange {
        match score {
            MainScore::Race => self.race,
            MainScore::Coin => self.coin,
            MainScore::Drift => self.drift,
            MainScore::Combat => self.combat,
        }
    }

    pub fn padded(&self) -> ScoreRanges {
        ScoreRanges {
            race: self.race.padded(),
            coin: self.coin.padded(),
            drift: self.drift.padded(),
            combat: self.combat.padded(),
        }
    }
}

/// Resolve the inventory and estimate its ranges.
pub fn estimate_for_inventory(catalog: &Catalog, inventory: &Inventory) -> GfResult<ScoreRanges> {
    let parts = EligibleParts::resolve(catalog, inventory)?;
    Ok(estimate_main_score_ranges(&parts))
}

/// Unpadded ranges. Call [`ScoreRanges::padded`] for slider bounds.
pub fn estimate_main_score_ranges(parts: &EligibleParts) -> ScoreRanges {
    let keys = coeffs::scored_keys();

    let mut total_min = ZERO_STATS;
    let mut total_max = ZERO_STATS;

    for table in parts.singles() {
        let (mn, mx) = column_minmax(table, &keys);
        accumulate(&mut total_min, &mut total_max, &mn, &mx, &keys);
    }

    let (mn, mx) = trinket_pair_minmax(&parts.trinket, &keys);
    accumulate(&mut total_min, &mut total_max, &mn, &mx, &keys);

    let range = |c: Coeffs| lin_minmax(&total_min, &total_max, c);
    ScoreRanges {
        race: range(coeffs::RACE),
        coin: range(coeffs::COIN),
        drift: range(coeffs::DRIFT),
        combat: range(coeffs::COMBAT),
    }
}

fn accumulate(
    total_min: &mut StatVector,
    total_max: &mut StatVector,
    mn: &StatVector,
    mx: &StatVector,
    keys: &[StatKey],
) {
    for k in keys {
        let i = k.idx();
        total_min[i] += mn[i];
        total_max[i] += mx[i];
    }
}

/// Per-key extremes over single parts. An empty table contributes zeros.
fn column_minmax(table: &CategoryTable, keys: &[StatKey]) -> (StatVector, StatVector) {
    extremes(table.rows().iter().copied(), keys)
}

/// Per-key extremes over sums of distinct trinket pairs.
fn trinket_pair_minmax(table: &CategoryTable, keys: &[StatKey]) -> (StatVector, StatVector) {
    let rows = table.rows();
    let sums = trinket_pairs(rows.len()).map(|(a, b)| {
        let mut s = ZERO_STATS;
        for k in keys {
            s[k.idx()] = rows[a][k.idx()] + rows[b][k.idx()];
        }
        s
    });
    extremes(sums, keys)
}

fn extremes<I>(rows: I, keys: &[StatKey]) -> (StatVector, StatVector)
where
    I: Iterator<Item = StatVector>,
{
    let mut mn = [f32::INFINITY; crate::stats::STAT_COUNT];
    let mut mx = [f32::NEG_INFINITY; crate::stats::STAT_COUNT];
    let mut any = false;

    for row in rows {
        any = true;
        for k in keys {
            let i = k.idx();
            mn[i] = mn[i].min(row[i]);
            mx[i] = mx[i].max(row[i]);
        }
    }

    if !any {
        return (ZERO_STATS, ZERO_STATS);
    }
    (mn, mx)
}

/// Extremes of a linear form over a box; negative coefficients swap ends.
fn lin_minmax(total_min: &StatVector, total_max: &StatVector, coeffs: Coeffs) -> ScoreRange {
    let mut lo = 0.0;
    let mut hi = 0.0;
    for &(key, c) in coeffs {
        let i = key.idx();
        if c >= 0.0 {
            lo += c * total_min[i];
            hi += c * total_max[i];
        } else {
            lo += c * total_max[i];
            hi += c * total_min[i];
        }
    }
    ScoreRange { lo, hi }
}
