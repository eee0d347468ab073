use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "people-book", version, about = "Keep track of people and their birthdays")]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true, env = "PEOPLE_BOOK_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Data file shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct FileArg {
    /// JSON file holding the people
    #[arg(env = "PEOPLE_BOOK_FILE")]
    pub file: PathBuf,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new person
    Add {
        #[command(flatten)]
        file: FileArg,

        /// Surname
        #[arg(short = 'l', long, alias = "last_name", required_unless_present = "interactive")]
        last_name: Option<String>,

        /// First name
        #[arg(short, long, alias = "first_name", required_unless_present = "interactive")]
        first_name: Option<String>,

        /// Phone number, stored as typed
        #[arg(short, long, alias = "phone_number", required_unless_present = "interactive")]
        phone_number: Option<String>,

        /// Birthdate (DD.MM.YYYY)
        #[arg(short, long, required_unless_present = "interactive")]
        birthdate: Option<String>,

        /// Prompt for any field not given on the command line
        #[arg(short, long)]
        interactive: bool,
    },
    /// List everyone, sorted by surname
    List {
        #[command(flatten)]
        file: FileArg,
    },
    /// Show people born in a given month
    Select {
        #[command(flatten)]
        file: FileArg,

        /// Month (1 to 12)
        #[arg(
            short,
            long,
            allow_negative_numbers = true,
            required_unless_present = "interactive"
        )]
        month: Option<i64>,

        /// Prompt for the month if not given
        #[arg(short, long)]
        interactive: bool,
    },
}
