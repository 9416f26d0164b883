use std::path::Path;

use colored::Colorize;

use dbdd_sheet::SheetState;

pub fn run(path: &Path, force: bool) -> Result<(), String> {
    let _lock = super::lock_sheet(path)?;
    if path.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        ));
    }

    super::save_state(path, &SheetState::default())?;

    println!(
        "  {} sheet '{}'",
        "Created".green().bold(),
        path.display()
    );
    println!("  Set ratings with `dbdd set <trait> <0-4>`, then `dbdd roll <trait>`.");
    Ok(())
}
