use std::path::Path;

use dbdd_mechanics::RollModifier;
use dbdd_sheet::{SheetConfig, Trait};

pub fn run(
    path: &Path,
    name: &str,
    modifier: RollModifier,
    seed: Option<u64>,
) -> Result<(), String> {
    let config = SheetConfig::default().with_path(path).with_seed(seed);
    let _lock = super::lock_sheet(&config.path)?;
    let state = super::load_state(&config.path)?;
    let t = Trait::parse(name).map_err(|e| e.to_string())?;

    let mut roller = config.roller();
    let record = state
        .roll(t, modifier, &mut roller)
        .map_err(|e| e.to_string())?;
    super::save_state(&config.path, &state)?;

    println!("  {}", super::format_record(&record));
    if record.dice.len() > 1 {
        let faces: Vec<String> = record.dice.iter().map(|d| d.to_string()).collect();
        println!("  dice: [{}]", faces.join(", "));
    }
    Ok(())
}
