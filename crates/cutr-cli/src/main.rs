//! cutr - print selected parts of lines from each FILE to standard output.

use std::process::ExitCode;

use colored::Colorize;
use cutr_cli::error::exit_code_from_error;

fn main() -> ExitCode {
    match cutr_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err}", "cutr:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
