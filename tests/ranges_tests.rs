use gearforge::catalog::Category;
use gearforge::config::OptimizeConfig;
use gearforge::error::GearForgeError;
use gearforge::inventory::{EligibleParts, Inventory};
use gearforge::ranges::{self, ScoreRange};
use gearforge::scorer::MainScore;
use rstest::rstest;

mod common;
use common::{approx_eq, brute_force, minimal_inventory, sample_catalog};

fn tol(v: f32) -> f32 {
    1e-3 * (1.0 + v.abs())
}

#[test]
fn test_ranges_bound_every_build() {
    let catalog = sample_catalog();
    let inv = Inventory::all_owned(&catalog);
    let ranges = ranges::estimate_for_inventory(&catalog, &inv).unwrap();

    let builds = brute_force(&catalog, &inv, &OptimizeConfig::default());
    assert_eq!(builds.len(), 144);

    for b in &builds {
        for score in MainScore::all() {
            let r = ranges.get(score);
            let v = b.scores.get(score);
            assert!(
                v >= r.lo - tol(r.lo) && v <= r.hi + tol(r.hi),
                "{} = {} outside [{}, {}] for {:?}",
                score,
                v,
                r.lo,
                r.hi,
                b.parts
            );
        }
    }
}

#[test]
fn test_single_build_range_is_a_point() {
    let catalog = sample_catalog();
    let inv = minimal_inventory();
    let ranges = ranges::estimate_for_inventory(&catalog, &inv).unwrap();

    let only = &brute_force(&catalog, &inv, &OptimizeConfig::default())[0];
    for score in MainScore::all() {
        let r = ranges.get(score);
        assert!(approx_eq(r.lo, r.hi), "{} range is not a point", score);
        assert!(approx_eq(r.lo, only.scores.get(score)));
    }
}

#[test]
fn test_negative_coefficient_swaps_extremes() {
    // Heavy Engine carries the only SlowAreaPenalty. Keys are bounded
    // independently, so the top end pairs the best Speed with no penalty.
    let catalog = sample_catalog();
    let mut inv = minimal_inventory();
    inv.insert(Category::Engine, "Heavy Engine");

    let parts = EligibleParts::resolve(&catalog, &inv).unwrap();
    let r = ranges::estimate_main_score_ranges(&parts).race;

    // Speed 4.5..6.5, StartBoost 0..2, SlipStreamSpd 2, penalty 0..1
    assert!(approx_eq(r.lo, 2.0 * 4.5 + 2.4 - 1.0), "lo {}", r.lo);
    assert!(approx_eq(r.hi, 2.0 * 6.5 + 1.5 * 2.0 + 2.4), "hi {}", r.hi);

    for b in brute_force(&catalog, &inv, &OptimizeConfig::default()) {
        assert!(r.contains(b.scores.race));
    }
}

#[test]
fn test_trinkets_use_distinct_pairs() {
    // Ducky is the only SlipStreamRadius trinket, so the pair maximum is
    // Ducky plus the best other trinket, never Ducky twice.
    let catalog = sample_catalog();
    let inv = Inventory::all_owned(&catalog);
    let ranges = ranges::estimate_for_inventory(&catalog, &inv).unwrap();

    let builds = brute_force(&catalog, &inv, &OptimizeConfig::default());
    let best_combat = builds
        .iter()
        .map(|b| b.scores.combat)
        .fold(f32::NEG_INFINITY, f32::max);

    // Each combat key peaks on a different part, so the bound is reached.
    assert!(approx_eq(ranges.combat.hi, best_combat));
}

#[rstest]
#[case(ScoreRange { lo: 0.0, hi: 10.0 }, -1.0, 11.0)]
#[case(ScoreRange { lo: 0.0, hi: 100.0 }, -5.0, 105.0)]
#[case(ScoreRange { lo: -40.0, hi: 160.0 }, -50.0, 170.0)]
#[case(ScoreRange { lo: 3.0, hi: 3.0 }, 2.0, 4.0)]
fn test_padding(#[case] raw: ScoreRange, #[case] lo: f32, #[case] hi: f32) {
    let padded = raw.padded();
    assert!(approx_eq(padded.lo, lo), "lo {} != {}", padded.lo, lo);
    assert!(approx_eq(padded.hi, hi), "hi {} != {}", padded.hi, hi);
}

#[test]
fn test_padded_ranges_contain_raw() {
    let catalog = sample_catalog();
    let raw = ranges::estimate_for_inventory(&catalog, &Inventory::all_owned(&catalog)).unwrap();
    let padded = raw.padded();

    for score in MainScore::all() {
        let (r, p) = (raw.get(score), padded.get(score));
        assert!(p.lo < r.lo && p.hi > r.hi);
        assert!(p.contains(r.lo) && p.contains(r.hi));
    }
}

#[test]
fn test_builtin_ranges_are_ordered() {
    let catalog = gearforge::catalog::Catalog::builtin().unwrap();
    let raw = ranges::estimate_for_inventory(&catalog, &Inventory::all_owned(&catalog)).unwrap();

    for score in MainScore::all() {
        let r = raw.get(score);
        assert!(r.lo.is_finite() && r.hi.is_finite());
        assert!(r.lo <= r.hi, "{}: {} > {}", score, r.lo, r.hi);
    }
    assert!(raw.race.span() > 0.0);
}

#[test]
fn test_ranges_need_a_valid_inventory() {
    let catalog = sample_catalog();
    let mut inv = Inventory::new();
    inv.insert(Category::Trinket, "Ducky");

    let err = ranges::estimate_for_inventory(&catalog, &inv).unwrap_err();
    assert!(matches!(err, GearForgeError::Validation(_)));
}
