use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Command-line arguments for the scaffold generator
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Root directory name inside the archive (also the archive file stem)
    pub root: Option<String>,

    /// Directory to write the archive into
    pub output_dir: Option<PathBuf>,

    /// TOML file replacing the built-in scaffold definition
    pub definition: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            root: matches.get_one::<String>("root").cloned(),
            output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
            definition: matches.get_one::<String>("definition").map(PathBuf::from),
        }
    }
}

fn command() -> Command {
    Command::new("arch-scaffold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a software architecture documentation scaffold as a zip archive")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .env("ARCH_SCAFFOLD_ROOT")
                .value_name("NAME")
                .help("Root directory name inside the archive [default: software-architecture-scaffold]")
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .env("ARCH_SCAFFOLD_OUTPUT_DIR")
                .value_name("DIR")
                .help("Directory to write the archive into (defaults to the current directory)")
        )
        .arg(
            Arg::new("definition")
                .short('d')
                .long("definition")
                .value_name("FILE")
                .help("TOML file with [[entry]] tables to use instead of the built-in scaffold")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log each archive member as it is written")
        )
}
