use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gearforge::catalog::CategoryTable;
use gearforge::error::GfResult;
use gearforge::optimizer::Build;
use gearforge::ranges::ScoreRanges;
use gearforge::scorer::MainScore;
use gearforge::stats::{StatKey, StatVector};
use std::path::Path;

const STAT_SECTIONS: [(&str, &[StatKey]); 5] = [
    (
        "Movement",
        &[
            StatKey::Speed,
            StatKey::StartBoost,
            StatKey::BoostPads,
            StatKey::SlowAreaPenalty,
            StatKey::TrickSpd,
        ],
    ),
    (
        "Handling",
        &[
            StatKey::Steer,
            StatKey::DriftSteer,
            StatKey::DriftRate,
            StatKey::AirDriftTime,
        ],
    ),
    (
        "Coins",
        &[
            StatKey::StartCoins,
            StatKey::MaxCoins,
            StatKey::MaxCoinsSpd,
            StatKey::CoinBoostSpd,
            StatKey::CoinBoostTime,
        ],
    ),
    (
        "Combat",
        &[
            StatKey::UltCharge,
            StatKey::UltStart,
            StatKey::Daze,
            StatKey::SlipStreamRadius,
            StatKey::SlipStreamSpd,
            StatKey::SlipTime,
        ],
    ),
    ("Technical", &[StatKey::T1, StatKey::T2, StatKey::T3]),
];

fn fmt_stat(key: StatKey, v: f32) -> String {
    if key.is_percent() {
        format!("{:.2}%", v)
    } else {
        format!("{:.2}", v)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_builds(builds: &[Build]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Objective").fg(Color::Cyan),
        Cell::new("Race"),
        Cell::new("Coin"),
        Cell::new("Drift"),
        Cell::new("Combat"),
        Cell::new("Engine"),
        Cell::new("Exhaust"),
        Cell::new("Suspension"),
        Cell::new("Gearbox"),
        Cell::new("Trinket 1"),
        Cell::new("Trinket 2"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, b) in builds.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{:02}", rank + 1)).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", b.objective)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", b.race)),
            Cell::new(format!("{:.2}", b.coin)),
            Cell::new(format!("{:.2}", b.drift)),
            Cell::new(format!("{:.2}", b.combat)),
            Cell::new(&b.engine),
            Cell::new(&b.exhaust),
            Cell::new(&b.suspension),
            Cell::new(&b.gearbox),
            Cell::new(&b.trinket_1),
            Cell::new(&b.trinket_2),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_stat_summary(title: &str, totals: &StatVector) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Stat"),
        Cell::new("Total"),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (section, keys) in STAT_SECTIONS {
        for (i, key) in keys.iter().enumerate() {
            let v = totals[key.idx()];
            let value = Cell::new(fmt_stat(*key, v));
            let value = if v > 0.0 {
                value.fg(Color::Green)
            } else if v < 0.0 {
                value.fg(Color::Red)
            } else {
                value
            };
            table.add_row(vec![
                Cell::new(if i == 0 { section } else { "" }),
                Cell::new(key.to_string()),
                value,
            ]);
        }
    }
    println!("\n{}", table);
}

pub fn print_ranges(ranges: &ScoreRanges) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Slider Min").fg(Color::Cyan),
        Cell::new("Slider Max").fg(Color::Cyan),
        Cell::new("Step"),
    ]);
    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for score in MainScore::all() {
        let raw = ranges.get(score);
        let padded = raw.padded();
        let step = (padded.span() / 200.0).max(0.1);
        table.add_row(vec![
            Cell::new(score.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", raw.lo)),
            Cell::new(format!("{:.2}", raw.hi)),
            Cell::new(format!("{:.2}", padded.lo)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", padded.hi)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", step)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_parts(table_data: &CategoryTable) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(table_data.category.to_string()).add_attribute(Attribute::Bold),
        Cell::new("Stats"),
    ]);

    let mut order: Vec<usize> = (0..table_data.len()).collect();
    order.sort_by_key(|&i| table_data.name(i).to_lowercase());

    for i in order {
        let row = table_data.row(i);
        let stats: Vec<String> = StatKey::all()
            .filter(|k| row[k.idx()] != 0.0)
            .map(|k| format!("{} {:+}", k, row[k.idx()]))
            .collect();
        table.add_row(vec![
            Cell::new(table_data.name(i)),
            Cell::new(if stats.is_empty() {
                "-".to_string()
            } else {
                stats.join(", ")
            }),
        ]);
    }
    println!("\n{}", table);
}

const CSV_HEADER: [&str; 11] = [
    "objective",
    "race",
    "coin",
    "drift",
    "combat",
    "ENGINE",
    "EXHAUST",
    "SUSPENSION",
    "GEARBOX",
    "TRINKET_1",
    "TRINKET_2",
];

/// Header is written even when there are no builds.
pub fn export_csv<P: AsRef<Path>>(path: P, builds: &[Build]) -> GfResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for b in builds {
        writer.serialize(b)?;
    }
    writer.flush()?;
    Ok(())
}
