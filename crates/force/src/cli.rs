//! CLI argument parsing with clap, built from the command registry

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use force_core::{BUILD_VERSION, Registry};

const BIN_NAME: &str = "force";

/// Id of the hidden positional that swallows every argument after a command
const TRAILING_ARGS: &str = "args";

/// Top-level flags, accepted before the subcommand only
#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(version = BUILD_VERSION)]
#[command(about = "Command-line client")]
struct Flags {
    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,
}

/// Parsed top-level flags plus the routed command, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub verbose: bool,
    pub quiet: bool,
    pub json: bool,
    pub command: Option<Invoked>,
}

/// Command name and the raw arguments that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoked {
    pub name: String,
    pub args: Vec<String>,
}

/// Build the clap command tree, one subcommand per registered command
pub fn build(registry: &Registry) -> Command {
    let mut root = Flags::command();

    for command in registry.commands() {
        let spec = command.spec();
        root = root.subcommand(
            Command::new(spec.name)
                .about(spec.short)
                .long_about(spec.long)
                .override_usage(format!("{} {}", BIN_NAME, spec.usage))
                .arg(
                    Arg::new(TRAILING_ARGS)
                        .num_args(0..)
                        .action(ArgAction::Append)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .hide(true),
                ),
        );
    }

    root
}

/// Parse the process arguments, exiting on help or usage errors
pub fn parse(registry: &Registry) -> Cli {
    try_parse_from(registry, std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Parse an explicit argument list
pub fn try_parse_from<I, T>(registry: &Registry, argv: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build(registry).try_get_matches_from(argv)?;
    from_matches(&matches)
}

fn from_matches(matches: &ArgMatches) -> Result<Cli, clap::Error> {
    let flags = Flags::from_arg_matches(matches)?;
    let command = matches.subcommand().map(|(name, sub)| Invoked {
        name: name.to_string(),
        args: sub
            .get_many::<String>(TRAILING_ARGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    });

    Ok(Cli {
        verbose: flags.verbose,
        quiet: flags.quiet,
        json: flags.json,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use force_core::Config;

    fn registry() -> Registry {
        crate::commands::registry(&Config::default()).unwrap()
    }

    #[test]
    fn verify_cli() {
        build(&registry()).debug_assert();
    }

    #[test]
    fn test_version_without_args() {
        let cli = try_parse_from(&registry(), ["force", "version"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Invoked {
                name: "version".to_string(),
                args: vec![],
            })
        );
        assert!(!cli.json && !cli.quiet && !cli.verbose);
    }

    #[test]
    fn test_version_swallows_unknown_args() {
        let cli =
            try_parse_from(&registry(), ["force", "version", "--bogus", "extra", "-x"]).unwrap();
        let invoked = cli.command.unwrap();
        assert_eq!(invoked.name, "version");
        assert_eq!(invoked.args, vec!["--bogus", "extra", "-x"]);
    }

    #[test]
    fn test_top_level_flags() {
        let cli = try_parse_from(&registry(), ["force", "-v", "--json", "version"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = try_parse_from(&registry(), ["force"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommand_help_text() {
        let mut root = build(&registry());
        let version = root.find_subcommand_mut("version").unwrap();
        let help = version.render_long_help().to_string();
        assert!(help.contains("Display current version"));
        assert!(help.contains("force version"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(try_parse_from(&registry(), ["force", "frobnicate"]).is_err());
    }
}
