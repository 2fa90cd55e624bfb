use clap::{Parser, Subcommand};

/// DietCalc: a CLI that sums meal macros from a diet sheet and recalls saved picks.
#[derive(Parser, Debug)]
#[command(name = "diet_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the diet sheet CSV export.
    #[arg(short, long, default_value = "diet.csv")]
    pub sheet: String,

    /// Path to the saved selections JSON file.
    #[arg(long, default_value = "selections.json")]
    pub selections: String,

    /// Parse with the single-pass policy (macros only, no header filtering).
    #[arg(long)]
    pub single_pass: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick meals interactively and total their macros.
    Totals {
        /// Pre-check the meals of a saved selection.
        #[arg(long)]
        from: Option<String>,
    },

    /// List the meals parsed from the sheet.
    Meals {
        /// Include each meal's food items.
        #[arg(long)]
        items: bool,
    },

    /// List saved selections.
    Selections,

    /// Total the macros of a saved selection.
    Show {
        /// Name of the saved selection.
        name: String,
    },

    /// Delete a saved selection.
    Delete {
        /// Name of the saved selection.
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Totals { from: None }
    }
}
