#![allow(dead_code)] // Not every test binary uses every helper

use gearforge::catalog::{Catalog, Category};
use gearforge::config::OptimizeConfig;
use gearforge::inventory::{EligibleParts, Inventory};
use gearforge::scorer::{self, MainScores};
use gearforge::stats::{sum2, StatVector};

pub const SAMPLE_CATALOG: &str = r#"{
    "ENGINE": [
        {"name": "Basic Engine", "stats": {"Speed": 1, "StartBoost": 2}},
        {"name": "Heavy Engine", "stats": {"Speed": 3, "SlowAreaPenalty": 1, "Daze": 10}},
        {"name": "Coin Engine", "stats": {"MaxCoins": 4, "Speed": -1}}
    ],
    "EXHAUST": [
        {"name": "Coin Exhaust", "stats": {"CoinBoostSpd": 2, "CoinBoostTime": 0.5}},
        {"name": "Light Exhaust", "stats": {"Speed": 0.5, "DriftSteer": 1, "AirDriftTime": 0.2}}
    ],
    "SUSPENSION": [
        {"name": "Soft Suspension", "stats": {"Steer": 2}},
        {"name": "Locked Suspension", "stats": {"Daze": 4, "Speed": -1}}
    ],
    "GEARBOX": [
        {"name": "Grass Gearbox", "stats": {"T1": 1, "T2": 0.5}},
        {"name": "Ult Gearbox", "stats": {"UltCharge": 1, "SlipStreamSpd": 2}}
    ],
    "TRINKET": [
        {"name": "Fast Runner", "stats": {"Speed": 1}},
        {"name": "Lucky Dice", "stats": {"StartBoost": 1, "StartCoins": 2}},
        {"name": "Voodoo", "stats": {"MaxCoins": -1}},
        {"name": "Ducky", "stats": {"SlipStreamRadius": 5, "Speed": 2, "SlipTime": 3}}
    ]
}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_reader(SAMPLE_CATALOG.as_bytes()).expect("sample catalog parses")
}

/// One part per single slot and exactly two trinkets.
pub fn minimal_inventory() -> Inventory {
    let mut inv = Inventory::new();
    inv.insert(Category::Engine, "Basic Engine")
        .insert(Category::Exhaust, "Light Exhaust")
        .insert(Category::Suspension, "Soft Suspension")
        .insert(Category::Gearbox, "Ult Gearbox")
        .insert(Category::Trinket, "Fast Runner")
        .insert(Category::Trinket, "Ducky");
    inv
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * (1.0 + a.abs().max(b.abs()))
}

/// One fully enumerated build, computed the slow way.
#[derive(Debug, Clone)]
pub struct ReferenceBuild {
    pub objective: f32,
    pub scores: MainScores,
    pub parts: [String; 6],
    pub passes: bool,
}

/// Every legal build with its scores and objective, no pruning.
pub fn brute_force(
    catalog: &Catalog,
    inventory: &Inventory,
    config: &OptimizeConfig,
) -> Vec<ReferenceBuild> {
    let parts = EligibleParts::resolve(catalog, inventory).expect("valid inventory");
    let main = config.effective_main_weights();
    let raw = config.resolved_raw_weights();
    let constraints = config.active_constraints();
    let t = &parts.trinket;

    let mut out = Vec::new();
    for e in 0..parts.engine.len() {
        for x in 0..parts.exhaust.len() {
            for s in 0..parts.suspension.len() {
                for g in 0..parts.gearbox.len() {
                    let mut base: StatVector = *parts.engine.row(e);
                    base = sum2(&base, parts.exhaust.row(x));
                    base = sum2(&base, parts.suspension.row(s));
                    base = sum2(&base, parts.gearbox.row(g));

                    for a in 0..t.len() {
                        for b in (a + 1)..t.len() {
                            let totals = sum2(&base, &sum2(t.row(a), t.row(b)));
                            let scores = scorer::score(&totals);

                            let mut objective = 0.0f32;
                            for (k, w) in &main {
                                objective += w * scores.get(*k);
                            }
                            for (k, w) in &raw {
                                objective += w * totals[k.idx()];
                            }
                            let passes =
                                constraints.iter().all(|(k, bd)| bd.contains(scores.get(*k)));

                            out.push(ReferenceBuild {
                                objective,
                                scores,
                                parts: [
                                    parts.engine.name(e).to_string(),
                                    parts.exhaust.name(x).to_string(),
                                    parts.suspension.name(s).to_string(),
                                    parts.gearbox.name(g).to_string(),
                                    t.name(a).to_string(),
                                    t.name(b).to_string(),
                                ],
                                passes,
                            });
                        }
                    }
                }
            }
        }
    }
    out
}

/// Recompute a build's totals by looking each part up in the catalog.
pub fn recompute_scores(catalog: &Catalog, parts: [(Category, &str); 6]) -> MainScores {
    let mut totals = [0.0; gearforge::stats::STAT_COUNT];
    for (category, name) in parts {
        let row = catalog
            .table(category)
            .unwrap()
            .part(name)
            .unwrap_or_else(|| panic!("{} not in {}", name, category));
        totals = sum2(&totals, row);
    }
    scorer::score(&totals)
}
