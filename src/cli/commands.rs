use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::exitcode;
use crate::repair::{check_file, repair_file, ScanReport};

const DEFAULT_INPUT: &str = "day6_orig.txt";
const DEFAULT_OUTPUT: &str = "day6.txt";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Fix {
            input,
            output,
            in_place,
        }) => _fix(input, output.as_deref(), *in_place),
        Some(Commands::Check { input, quiet }) => _check(input, *quiet),
        Some(Commands::Completion { shell }) => _completion(*shell),
        // Bare invocation mirrors the fixed-path behavior: day6_orig.txt -> day6.txt
        None => _fix(Path::new(DEFAULT_INPUT), None, false),
    }
}

#[instrument(level = "debug")]
fn _fix(input: &Path, output: Option<&Path>, in_place: bool) -> CliResult<()> {
    let target: PathBuf = if in_place {
        input.to_path_buf()
    } else {
        output.unwrap_or(Path::new(DEFAULT_OUTPUT)).to_path_buf()
    };
    debug!("input: {:?}, target: {:?}", input, target);

    let report = repair_file(input, &target)?;
    if report.is_clean() {
        output::success(&format!(
            "{} already clean, copied to {}",
            input.display(),
            target.display()
        ));
    } else {
        output::action(
            "Repaired",
            &format!("{} -> {}", input.display(), target.display()),
        );
        output::detail(&describe(&report));
    }
    Ok(())
}

#[instrument(level = "debug")]
fn _check(input: &Path, quiet: bool) -> CliResult<()> {
    let report = check_file(input)?;
    if report.is_clean() {
        if !quiet {
            output::success(&format!("{} is clean", input.display()));
        }
        Ok(())
    } else {
        if !quiet {
            output::failure(&format!("{} needs repair", input.display()));
            output::detail(&describe(&report));
            output::detail(&format!(
                "columns: {}",
                report.dirty_columns.iter().join(", ")
            ));
        }
        process::exit(exitcode::DIRTY);
    }
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn describe(report: &ScanReport) -> String {
    format!(
        "{} blank cell(s) in {} of {} digit column(s)",
        report.blank_cells,
        report.dirty_columns.len(),
        report.digit_columns
    )
}
