//! Line-oriented sheet session.
//!
//! `SheetSession` wraps a [`SheetState`] and a dice roller and answers text
//! commands: rolling traits, editing ratings and fields, and showing the
//! sheet.

use dbdd_mechanics::{DiceRoller, RandomRoller, RollModifier, interpret};

use crate::error::{SheetError, SheetResult};
use crate::sheet::{CharacterSheet, MetaField, POINT_BUDGET, TextField, Trait};
use crate::state::SheetState;

/// An interactive session on one character sheet.
pub struct SheetSession<D = RandomRoller> {
    state: SheetState,
    roller: D,
}

impl<D: DiceRoller> SheetSession<D> {
    /// Create a session over `state`, rolling with `roller`.
    pub fn new(state: SheetState, roller: D) -> Self {
        Self { state, roller }
    }

    /// The shared state this session edits.
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SheetResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(rest),
            "set" => self.do_set(rest),
            "meta" => self.do_meta(rest),
            "text" => self.do_text(rest),
            "sheet" => Ok(render_sheet(&self.state.sheet())),
            "latest" => Ok(self.state.latest_roll_line()),
            "interpret" => do_interpret(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SheetError::UnknownCommand(cmd)),
        }
    }

    fn do_roll(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("roll <trait> [adv|dis]".to_string()));
        }
        // The modifier is the last word when it parses; trait names never collide with one.
        let (name, modifier) = match rest.rsplit_once(' ') {
            Some((head, tail)) => match RollModifier::from_str_tag(tail) {
                Ok(m) => (head, m),
                Err(_) => (rest, RollModifier::Normal),
            },
            None => (rest, RollModifier::Normal),
        };
        let t = Trait::parse(name)?;
        let record = self.state.roll(t, modifier, &mut self.roller)?;
        Ok(record.to_string())
    }

    fn do_set(&mut self, rest: &str) -> SheetResult<String> {
        let usage = || SheetError::Usage("set <trait> <0-4>".to_string());
        let (name, value) = rest.rsplit_once(' ').ok_or_else(usage)?;
        let rating: u8 = value.trim().parse().map_err(|_| usage())?;
        let t = Trait::parse(name)?;
        self.state.set_rating(t, rating)?;
        Ok(format!("{t} set to {rating}"))
    }

    fn do_meta(&mut self, rest: &str) -> SheetResult<String> {
        let (name, value) = split_field(rest, "meta <size|build|level> <text>")?;
        let field = MetaField::parse(name)?;
        self.state.set_meta(field, value);
        Ok(format!("{} set", field.name()))
    }

    fn do_text(&mut self, rest: &str) -> SheetResult<String> {
        // Field names may contain spaces, so try the longest matching prefix.
        for end in word_ends(rest).into_iter().rev() {
            if let Ok(field) = TextField::parse(&rest[..end]) {
                self.state.set_text(field, rest[end..].trim_start());
                return Ok(format!("{} set", field.name()));
            }
        }
        match rest.split_whitespace().next() {
            Some(first) => Err(SheetError::UnknownField(first.to_string())),
            None => Err(SheetError::Usage("text <field> <text>".to_string())),
        }
    }
}

/// Whether `input` asks to leave the session.
pub fn is_quit(input: &str) -> bool {
    input
        .split_whitespace()
        .next()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q"))
}

/// Byte offsets just past each word of `s`.
fn word_ends(s: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut in_word = false;
    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if in_word {
                ends.push(i);
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }
    if in_word {
        ends.push(s.len());
    }
    ends
}

fn split_field<'a>(rest: &'a str, usage: &str) -> SheetResult<(&'a str, &'a str)> {
    match rest.split_once(' ') {
        Some((name, value)) => Ok((name, value.trim())),
        None if !rest.is_empty() => Ok((rest, "")),
        None => Err(SheetError::Usage(usage.to_string())),
    }
}

fn do_interpret(rest: &str) -> SheetResult<String> {
    let usage = || SheetError::Usage("interpret <pool> <total>".to_string());
    let mut nums = rest.split_whitespace().map(str::parse::<u32>);
    let (Some(Ok(pool)), Some(Ok(total)), None) = (nums.next(), nums.next(), nums.next()) else {
        return Err(usage());
    };
    Ok(format!("{pool}d6 = {total} \u{2192} {}", interpret(pool, total)))
}

/// Render a sheet as plain text.
pub fn render_sheet(sheet: &CharacterSheet) -> String {
    let mut out = String::new();
    let meta: Vec<String> = MetaField::ALL
        .iter()
        .map(|&m| format!("{}: {}", m.name(), or_dash(sheet.meta(m))))
        .collect();
    out.push_str(&meta.join(" | "));
    out.push('\n');
    out.push_str(&format!(
        "Total Trait Points: {} / {POINT_BUDGET}\n\n",
        sheet.total_points()
    ));

    for (t, rating) in sheet.ratings() {
        let options = sheet.roll_options(t);
        let buttons: Vec<&str> = RollModifier::ALL
            .iter()
            .filter(|&&m| options.allows(m))
            .map(|m| m.short())
            .collect();
        out.push_str(&format!(
            "  {:<10} {rating}  [{}]\n",
            t.name(),
            buttons.join(" ")
        ));
    }
    out.push('\n');

    for field in TextField::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            field.name(),
            or_dash(sheet.text(field))
        ));
    }
    out.trim_end().to_string()
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "\u{2014}" } else { s }
}

const HELP: &str = "\
Commands:
  roll <trait> [adv|dis]     Roll a trait (e.g. roll might adv)
  set <trait> <0-4>          Set a trait rating
  meta <size|build|level> <text>
                             Set a metadata field
  text <field> <text>        Set talent description, vulnerability,
                             resistance or feature
  sheet                      Show the sheet
  latest                     Show the latest roll
  interpret <pool> <total>   Look up the outcome table
  help                       Show this help
  quit                       Leave the session";
