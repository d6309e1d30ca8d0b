//! Entry point for the `parkside` command-line interface.
#![forbid(unsafe_code)]

use parkside_cli::CliError;

fn main() {
    pretty_env_logger::init();
    match parkside_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("parkside: {err}");
            std::process::exit(1);
        }
    }
}
