//! # CLI Argument Definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Plans companion code for every enum listed in a manifest and prints the plans as JSON.
#[derive(Debug, Parser)]
#[command(name = "enumgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plans companion code for annotated enums")]
pub struct Cli {
    /// JSON manifest: an array of enum declarations (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// Settings file; `enumgen.toml` in the working directory is used when present
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Global directive applied before every type's own directives (repeatable)
    #[arg(short = 'D', long = "directive", value_name = "@DIRECTIVE", allow_hyphen_values = true)]
    pub directives: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collects_repeated_directives() {
        let cli = Cli::try_parse_from([
            "enumgen",
            "-m",
            "types.json",
            "-D",
            "@marshal",
            "--directive",
            "@prefix:\"My\"",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.directives, vec!["@marshal", "@prefix:\"My\""]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.config.is_none());
    }
}
