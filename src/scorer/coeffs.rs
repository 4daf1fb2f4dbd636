use super::types::MainScore;
use crate::stats::StatKey;

pub type Coeffs = &'static [(StatKey, f32)];

pub const RACE: Coeffs = &[
    (StatKey::Speed, 2.0),
    (StatKey::StartBoost, 1.5),
    (StatKey::SlipStreamSpd, 1.2),
    (StatKey::SlowAreaPenalty, -1.0),
];

pub const COIN: Coeffs = &[
    (StatKey::StartCoins, 1.0),
    (StatKey::MaxCoins, 2.0),
    (StatKey::CoinBoostSpd, 1.5),
    (StatKey::CoinBoostTime, 1.5),
];

pub const DRIFT: Coeffs = &[
    (StatKey::DriftSteer, 2.0),
    (StatKey::Steer, 1.5),
    (StatKey::AirDriftTime, 1.0),
];

pub const COMBAT: Coeffs = &[
    (StatKey::UltCharge, 2.0),
    (StatKey::Daze, 1.5),
    (StatKey::SlipStreamRadius, 1.0),
];

pub fn coeffs(score: MainScore) -> Coeffs {
    match score {
        MainScore::Race => RACE,
        MainScore::Coin => COIN,
        MainScore::Drift => DRIFT,
        MainScore::Combat => COMBAT,
    }
}

/// Stat keys that feed at least one main score, deduplicated, in column order.
pub fn scored_keys() -> Vec<StatKey> {
    let mut keys: Vec<StatKey> = [RACE, COIN, DRIFT, COMBAT]
        .iter()
        .flat_map(|c| c.iter().map(|(k, _)| *k))
        .collect();
    keys.sort();
    keys.dedup();
    keys
}
