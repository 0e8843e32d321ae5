//! doxygraph CLI - PlantUML diagrams for Doxygen XML.
//!
//! Reads every XML file in a Doxygen output directory, converts its include,
//! inheritance, collaboration and call graphs to `PlantUML`, and writes the
//! diagrams back into the files in place.

mod error;
mod extract;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use extract::ExtractArgs;
use output::Output;

/// doxygraph - Insert `PlantUML` diagrams for Doxygen XML graphs.
#[derive(Parser)]
#[command(name = "doxygraph", version, about)]
struct Cli {
    #[command(flatten)]
    args: ExtractArgs,
}

/// Exit status for a failed argument parse.
///
/// Usage errors (wrong argument count, unknown flags) exit with 1, the same
/// status as a missing directory. `--help` and `--version` exit with 0.
fn parse_exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_positional_argument_exits_with_one() {
        let err = Cli::try_parse_from(["doxygraph", "xml", "extra"])
            .err()
            .unwrap();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn test_unknown_flag_exits_with_one() {
        let err = Cli::try_parse_from(["doxygraph", "--bogus", "xml"])
            .err()
            .unwrap();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn test_help_exits_with_zero() {
        let err = Cli::try_parse_from(["doxygraph", "--help"]).err().unwrap();
        assert_eq!(parse_exit_code(&err), 0);
    }

    #[test]
    fn test_single_directory_argument_parses() {
        assert!(Cli::try_parse_from(["doxygraph", "xml"]).is_ok());
    }
}
