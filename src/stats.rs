use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumString};

/// Every stat a part can carry. The declaration order is the column order of
/// all dense tables, so it must never be reshuffled.
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
#[strum(ascii_case_insensitive)]
pub enum StatKey {
    // Race
    Speed,
    StartBoost,
    SlipStreamSpd,
    SlowAreaPenalty,
    // Coin
    StartCoins,
    MaxCoins,
    CoinBoostSpd,
    CoinBoostTime,
    // Drift
    DriftSteer,
    Steer,
    AirDriftTime,
    // Combat
    UltCharge,
    Daze,
    SlipStreamRadius,
    // Raw only
    TrickSpd,
    BoostPads,
    MaxCoinsSpd,
    SlipTime,
    UltStart,
    DriftRate,
    T1,
    T2,
    T3,
}

pub const STAT_COUNT: usize = StatKey::COUNT;

/// Dense stat row. Index with `StatKey as usize` or [`StatKey::idx`].
pub type StatVector = [f32; STAT_COUNT];

pub const ZERO_STATS: StatVector = [0.0; STAT_COUNT];

impl StatKey {
    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = StatKey> {
        StatKey::iter()
    }

    /// Stats the game panel shows as percentages.
    pub fn is_percent(self) -> bool {
        matches!(
            self,
            StatKey::BoostPads
                | StatKey::SlowAreaPenalty
                | StatKey::DriftRate
                | StatKey::UltCharge
                | StatKey::Daze
        )
    }
}

#[inline(always)]
pub fn add_into(dst: &mut StatVector, src: &StatVector) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d += *s;
    }
}

#[inline(always)]
pub fn sum2(a: &StatVector, b: &StatVector) -> StatVector {
    let mut out = *a;
    add_into(&mut out, b);
    out
}
