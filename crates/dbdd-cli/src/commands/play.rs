use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use dbdd_sheet::session::is_quit;
use dbdd_sheet::{SheetConfig, SheetSession};

pub fn run(path: &Path, seed: Option<u64>) -> Result<(), String> {
    let config = SheetConfig::default().with_path(path).with_seed(seed);
    // Held for the whole session so other commands cannot interleave saves.
    let _lock = super::lock_sheet(&config.path)?;
    let state = super::load_state(&config.path)?;
    let mut session = SheetSession::new(state, config.roller());

    println!("  {} DBD&D sheet '{}'", "Opened".bold(), config.path.display());
    println!("  Latest: {}", session.state().latest_roll_line());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                super::save_state(&config.path, session.state())?;
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
