use std::path::Path;

use dbdd_sheet::{MetaField, TextField, Trait};

pub fn set_rating(path: &Path, name: &str, rating: u8) -> Result<(), String> {
    let _lock = super::lock_sheet(path)?;
    let state = super::load_state(path)?;
    let t = Trait::parse(name).map_err(|e| e.to_string())?;
    state.set_rating(t, rating).map_err(|e| e.to_string())?;
    super::save_state(path, &state)?;

    let sheet = state.sheet();
    println!("  {t} set to {rating}");
    println!(
        "  Total Trait Points: {} / {}",
        sheet.total_points(),
        dbdd_sheet::sheet::POINT_BUDGET
    );
    if sheet.over_budget() {
        tracing::warn!(points = sheet.total_points(), "trait points over budget");
    }
    Ok(())
}

pub fn set_meta(path: &Path, field: &str, value: &str) -> Result<(), String> {
    let _lock = super::lock_sheet(path)?;
    let state = super::load_state(path)?;
    let field = MetaField::parse(field).map_err(|e| e.to_string())?;
    state.set_meta(field, value);
    super::save_state(path, &state)?;
    println!("  {} set", field.name());
    Ok(())
}

pub fn set_text(path: &Path, field: &str, value: &str) -> Result<(), String> {
    let _lock = super::lock_sheet(path)?;
    let state = super::load_state(path)?;
    let field = TextField::parse(field).map_err(|e| e.to_string())?;
    state.set_text(field, value);
    super::save_state(path, &state)?;
    println!("  {} set", field.name());
    Ok(())
}
