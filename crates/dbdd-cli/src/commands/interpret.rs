use dbdd_mechanics::interpret;

use super::colorize_outcome;

pub fn run(pool: u32, total: u32) -> Result<(), String> {
    let outcome = interpret(pool, total);
    println!("  {pool}d6 = {total} \u{2192} {}", colorize_outcome(outcome));
    Ok(())
}
