use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dbdd_mechanics::{RollModifier, pool_size};
use dbdd_sheet::sheet::POINT_BUDGET;
use dbdd_sheet::{MetaField, TextField};

pub fn run(path: &Path) -> Result<(), String> {
    let state = super::load_state(path)?;
    let sheet = state.sheet();

    println!("  {}", "DBD&D Character Sheet".bold());
    println!();
    for field in MetaField::ALL {
        println!("  {:<7} {}", format!("{}:", field.name()), or_dash(sheet.meta(field)));
    }
    println!();

    let points = format!("{} / {POINT_BUDGET}", sheet.total_points());
    let points = if sheet.over_budget() {
        points.red().bold()
    } else {
        points.normal()
    };
    println!("  Total Trait Points: {points}");
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Trait", "Rating", "Roll", "ADV", "DIS"]);

    for (t, rating) in sheet.ratings() {
        let mut row = vec![t.name().to_string(), rating.to_string()];
        for modifier in RollModifier::ALL {
            row.push(
                pool_size(rating, modifier)
                    .map(|n| format!("{n}d6"))
                    .unwrap_or_else(|_| "\u{2014}".to_string()),
            );
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();

    for field in TextField::ALL {
        println!("  {}: {}", field.name().bold(), or_dash(sheet.text(field)));
    }
    println!();

    println!("  {}", "Latest Roll".bold().underline());
    match state.latest_roll() {
        Some(record) => println!("  {}", super::format_record(&record)),
        None => println!("  {}", state.latest_roll_line().dimmed()),
    }

    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "\u{2014}" } else { s }
}
