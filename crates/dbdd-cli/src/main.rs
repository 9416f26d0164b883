//! CLI frontend for the DBD&D character sheet.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dbdd_mechanics::RollModifier;
use dbdd_sheet::config::DEFAULT_SHEET_PATH;

#[derive(Parser)]
#[command(
    name = "dbdd",
    about = "DBD&D character sheet and dice roller",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SheetFile {
    /// Sheet file to read and update
    #[arg(short, long, default_value = DEFAULT_SHEET_PATH)]
    file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a blank character sheet
    Init {
        /// Overwrite an existing sheet
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Show the character sheet
    Sheet {
        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Set a trait rating (0-4)
    Set {
        /// Trait name (e.g. might, insight, talent)
        name: String,

        /// New rating
        rating: u8,

        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Set a metadata field (size, build, level)
    Meta {
        /// Field name
        field: String,

        /// New value (omit to clear)
        #[arg(default_value = "")]
        value: String,

        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Set a text field (talent-description, vulnerability, resistance, feature)
    Text {
        /// Field name
        field: String,

        /// New value (omit to clear)
        #[arg(default_value = "")]
        value: String,

        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Roll a trait
    Roll {
        /// Trait name
        name: String,

        /// Roll with advantage (one rating higher)
        #[arg(long, conflicts_with = "dis")]
        adv: bool,

        /// Roll with disadvantage (one rating lower)
        #[arg(long)]
        dis: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        sheet: SheetFile,
    },

    /// Look up the outcome table for a pool size and total
    Interpret {
        /// Number of d6 rolled
        pool: u32,

        /// Rolled total
        total: u32,
    },

    /// Start an interactive session on the sheet
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        sheet: SheetFile,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force, sheet } => commands::init::run(&sheet.file, force),
        Commands::Sheet { sheet } => commands::sheet::run(&sheet.file),
        Commands::Set {
            name,
            rating,
            sheet,
        } => commands::edit::set_rating(&sheet.file, &name, rating),
        Commands::Meta {
            field,
            value,
            sheet,
        } => commands::edit::set_meta(&sheet.file, &field, &value),
        Commands::Text {
            field,
            value,
            sheet,
        } => commands::edit::set_text(&sheet.file, &field, &value),
        Commands::Roll {
            name,
            adv,
            dis,
            seed,
            sheet,
        } => {
            let modifier = if adv {
                RollModifier::Advantage
            } else if dis {
                RollModifier::Disadvantage
            } else {
                RollModifier::Normal
            };
            commands::roll::run(&sheet.file, &name, modifier, seed)
        }
        Commands::Interpret { pool, total } => commands::interpret::run(pool, total),
        Commands::Play { seed, sheet } => commands::play::run(&sheet.file, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
