use crate::error::{GearForgeError, GfResult};
use crate::scorer::MainScore;
use crate::stats::StatKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::warn;

pub const DEFAULT_TOP_N: usize = 20;

/// Qualitative weight level used by the front end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn weight(self) -> f32 {
        match self {
            Priority::Low => 0.0,
            Priority::Medium => 1.0,
            Priority::High => 4.0,
        }
    }
}

/// Inclusive range on a main score. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBound {
    pub lower: Option<f32>,
    pub upper: Option<f32>,
}

impl ScoreBound {
    pub fn new(lower: Option<f32>, upper: Option<f32>) -> Self {
        Self { lower, upper }
    }

    pub fn at_least(lower: f32) -> Self {
        Self::new(Some(lower), None)
    }

    pub fn at_most(upper: f32) -> Self {
        Self::new(None, Some(upper))
    }

    pub fn is_open(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    #[inline(always)]
    pub fn contains(&self, v: f32) -> bool {
        self.lower.map_or(true, |lo| v >= lo) && self.upper.map_or(true, |hi| v <= hi)
    }
}

impl FromStr for ScoreBound {
    type Err = GearForgeError;

    /// Parses `lo:hi`, `lo:` or `:hi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s.split_once(':').ok_or_else(|| {
            GearForgeError::Validation(format!("Bound '{}' must look like 'lo:hi'", s))
        })?;
        let parse = |part: &str| -> GfResult<Option<f32>> {
            let part = part.trim();
            if part.is_empty() {
                return Ok(None);
            }
            match part.parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(GearForgeError::Validation(format!(
                    "Invalid number '{}' in bound '{}'",
                    part, s
                ))),
            }
        };
        Ok(Self::new(parse(lo)?, parse(hi)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    pub top_n: usize,
    pub weights_main: BTreeMap<MainScore, f32>,
    /// Keyed by stat name; names that are not stat keys are ignored.
    pub weights_raw: BTreeMap<String, f32>,
    pub constraints_main: BTreeMap<MainScore, ScoreBound>,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            weights_main: default_main_weights(),
            weights_raw: BTreeMap::new(),
            constraints_main: BTreeMap::new(),
        }
    }
}

pub fn default_main_weights() -> BTreeMap<MainScore, f32> {
    MainScore::all()
        .map(|s| (s, if s == MainScore::Race { 1.0 } else { 0.0 }))
        .collect()
}

impl OptimizeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GearForgeError::Config(format!(
                "Could not read config at '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> GfResult<()> {
        if self.top_n == 0 {
            return Err(GearForgeError::Validation(
                "top_n must be at least 1".to_string(),
            ));
        }

        let not_finite = |what: String| {
            GearForgeError::Validation(format!("{} must be a finite number", what))
        };
        for (score, w) in &self.weights_main {
            if !w.is_finite() {
                return Err(not_finite(format!("Weight for {}", score)));
            }
        }
        for (name, w) in &self.weights_raw {
            if !w.is_finite() {
                return Err(not_finite(format!("Weight for raw stat {}", name)));
            }
        }
        for (score, bound) in &self.constraints_main {
            let ends = [bound.lower, bound.upper];
            if ends.iter().flatten().any(|v| !v.is_finite()) {
                return Err(not_finite(format!("Bound on {}", score)));
            }
        }
        Ok(())
    }

    /// Require every main score to be non-negative.
    pub fn keep_above_zero(&mut self) -> &mut Self {
        for score in MainScore::all() {
            self.constraints_main
                .insert(score, ScoreBound::at_least(0.0));
        }
        self
    }

    /// Main weights with the race-only default applied when none are set.
    pub fn effective_main_weights(&self) -> Vec<(MainScore, f32)> {
        if self.weights_main.is_empty() {
            default_main_weights().into_iter().collect()
        } else {
            self.weights_main.iter().map(|(k, w)| (*k, *w)).collect()
        }
    }

    /// Raw weights resolved to stat keys. Unknown names are dropped.
    pub fn resolved_raw_weights(&self) -> Vec<(StatKey, f32)> {
        self.weights_raw
            .iter()
            .filter_map(|(name, w)| match StatKey::from_str(name) {
                Ok(key) => Some((key, *w)),
                Err(_) => {
                    warn!("Ignoring weight for unknown raw stat '{}'", name);
                    None
                }
            })
            .collect()
    }

    /// Constraints that actually restrict something.
    pub fn active_constraints(&self) -> Vec<(MainScore, ScoreBound)> {
        self.constraints_main
            .iter()
            .filter(|(_, b)| !b.is_open())
            .map(|(k, b)| (*k, *b))
            .collect()
    }
}

/// Splits `name=value`.
pub fn parse_assignment(s: &str) -> GfResult<(String, String)> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| {
            GearForgeError::Validation(format!("Expected 'name=value', got '{}'", s))
        })
}

/// Accepts a priority level (`low`, `medium`, `high`) or a plain number.
pub fn parse_weight(s: &str) -> GfResult<f32> {
    if let Ok(p) = s.trim().parse::<Priority>() {
        return Ok(p.weight());
    }
    match s.trim().parse::<f32>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(GearForgeError::Validation(format!("Invalid weight '{}'", s))),
    }
}

pub fn parse_main_score(s: &str) -> GfResult<MainScore> {
    MainScore::from_str(s.trim())
        .map_err(|_| GearForgeError::Validation(format!("Unknown main score '{}'", s)))
}
