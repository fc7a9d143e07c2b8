//! force CLI

mod cli;
mod commands;
mod logging;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use force_core::{Config, ForceError, Invocation, Registry};
use tracing::debug;

use cli::Invoked;
use output::{JsonIssue, JsonResponse};

fn main() -> ExitCode {
    let config = Config::default();
    let registry = match commands::registry(&config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let cli = cli::parse(&registry);
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(invoked) => run_command(&registry, invoked, cli.json, cli.quiet),
        None => {
            // No subcommand - print version info
            if cli.quiet {
                Ok(0)
            } else {
                print_banner(&config).map(|()| 0).map_err(|e| e.to_string())
            }
        }
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Route a parsed command through the registry
fn run_command(
    registry: &Registry,
    invoked: Invoked,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    debug!(command = %invoked.name, args = invoked.args.len(), "dispatching");
    let invocation = Invocation::new(invoked.args).with_json(json_output);

    let dispatched = if quiet {
        registry.dispatch(&invoked.name, &invocation, &mut io::sink())
    } else {
        let mut stdout = io::stdout().lock();
        registry
            .dispatch(&invoked.name, &invocation, &mut stdout)
            .and_then(|()| stdout.flush().map_err(Into::into))
    };

    match dispatched {
        Ok(()) => Ok(0),
        Err(e) if json_output => match print_error_envelope(&invoked.name, &e) {
            Ok(()) => Ok(e.exit_code()),
            // Stdout is unusable; report the original failure on stderr
            Err(_) => Err(e.to_string()),
        },
        Err(e) => Err(e.to_string()),
    }
}

fn print_banner(config: &Config) -> Result<(), ForceError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "force {}", config.version)?;
    writeln!(stdout, "Use --help for usage information")?;
    stdout.flush()?;
    Ok(())
}

fn print_error_envelope(command: &str, err: &ForceError) -> Result<(), ForceError> {
    let response = JsonResponse::error(command, (), vec![JsonIssue::from(err)]);
    let line = serde_json::to_string(&response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
