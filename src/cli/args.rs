//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Repair fixed-width digit grids: fill blank cells with zeros in columns that carry digits
#[derive(Parser, Debug)]
#[command(name = "bandfix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill blanks with zeros in digit-bearing columns, write repaired copy
    Fix {
        /// Input grid file
        #[arg(default_value = "day6_orig.txt", value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Output file, overwritten if present (default: day6.txt)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Rewrite the input file instead of writing a copy
        #[arg(long, conflicts_with = "output")]
        in_place: bool,
    },

    /// Report blanks that a fix would fill, without writing anything
    Check {
        /// Input grid file
        #[arg(default_value = "day6_orig.txt", value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// No output, exit code only (0=clean, 1=needs repair)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
