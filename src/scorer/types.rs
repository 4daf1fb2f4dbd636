use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MainScore {
    Race,
    Coin,
    Drift,
    Combat,
}

impl MainScore {
    pub fn all() -> impl Iterator<Item = MainScore> {
        MainScore::iter()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainScores {
    pub race: f32,
    pub coin: f32,
    pub drift: f32,
    pub combat: f32,
}

impl MainScores {
    #[inline(always)]
    pub fn get(&self, score: MainScore) -> f32 {
        match score {
            MainScore::Race => self.race,
            MainScore::Coin => self.coin,
            MainScore::Drift => self.drift,
            MainScore::Combat => self.combat,
        }
    }
}

/// Column-major scores for a batch of stat totals.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScoreBatch {
    pub race: Vec<f32>,
    pub coin: Vec<f32>,
    pub drift: Vec<f32>,
    pub combat: Vec<f32>,
}

impl ScoreBatch {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            race: Vec::with_capacity(n),
            coin: Vec::with_capacity(n),
            drift: Vec::with_capacity(n),
            combat: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.race.len()
    }

    pub fn is_empty(&self) -> bool {
        self.race.is_empty()
    }

    pub fn push(&mut self, s: MainScores) {
        self.race.push(s.race);
        self.coin.push(s.coin);
        self.drift.push(s.drift);
        self.combat.push(s.combat);
    }

    pub fn column(&self, score: MainScore) -> &[f32] {
        match score {
            MainScore::Race => &self.race,
            MainScore::Coin => &self.coin,
            MainScore::Drift => &self.drift,
            MainScore::Combat => &self.combat,
        }
    }

    pub fn at(&self, i: usize) -> MainScores {
        MainScores {
            race: self.race[i],
            coin: self.coin[i],
            drift: self.drift[i],
            combat: self.combat[i],
        }
    }
}
