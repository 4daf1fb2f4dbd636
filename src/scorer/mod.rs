pub mod coeffs;
pub mod types;

pub use self::types::{MainScore, MainScores, ScoreBatch};
use self::coeffs::Coeffs;
use crate::stats::StatVector;

#[inline(always)]
fn linear(totals: &StatVector, coeffs: Coeffs) -> f32 {
    coeffs
        .iter()
        .fold(0.0, |acc, &(key, c)| acc + c * totals[key.idx()])
}

/// Derived scores of a single stat-total vector.
#[inline(always)]
pub fn score(totals: &StatVector) -> MainScores {
    MainScores {
        race: linear(totals, coeffs::RACE),
        coin: linear(totals, coeffs::COIN),
        drift: linear(totals, coeffs::DRIFT),
        combat: linear(totals, coeffs::COMBAT),
    }
}

pub fn score_one(totals: &StatVector, which: MainScore) -> f32 {
    linear(totals, coeffs::coeffs(which))
}

/// Derived scores for a batch of totals, aligned with the input.
pub fn score_batch(totals: &[StatVector]) -> ScoreBatch {
    let mut batch = ScoreBatch::with_capacity(totals.len());
    for t in totals {
        batch.push(score(t));
    }
    batch
}
