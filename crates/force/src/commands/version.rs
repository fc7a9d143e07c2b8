//! Implementation of the `force version` command
//!
//! Prints the build's version identifier. Any arguments are ignored.

use std::io::Write;

use force_core::{Command, CommandSpec, Config, ForceError, Invocation, VersionReporter};
use tracing::debug;

use crate::output::{JsonResponse, VersionData};

/// Registration info for `version`
pub const SPEC: CommandSpec = CommandSpec {
    name: "version",
    usage: "version",
    short: "Display current version",
    long: "\nDisplay current version\n\nExamples:\n\n  force version\n",
};

/// The `version` command
pub struct VersionCommand {
    reporter: VersionReporter,
}

impl VersionCommand {
    pub fn new(config: Config) -> Self {
        Self {
            reporter: VersionReporter::new(config.version),
        }
    }
}

impl Command for VersionCommand {
    fn spec(&self) -> &CommandSpec {
        &SPEC
    }

    fn run(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<(), ForceError> {
        if !invocation.args.is_empty() {
            debug!(args = ?invocation.args, "ignoring arguments to version");
        }

        if invocation.json {
            let response = JsonResponse::ok(
                SPEC.name,
                VersionData {
                    version: self.reporter.version().to_string(),
                },
            );
            writeln!(out, "{}", serde_json::to_string(&response)?)?;
            return Ok(());
        }

        self.reporter.report(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> VersionCommand {
        VersionCommand::new(Config::with_version("dev_20170302").unwrap())
    }

    #[test]
    fn test_plain_output() {
        let mut out = Vec::new();
        command().run(&Invocation::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "dev_20170302\n");
    }

    #[test]
    fn test_json_output_is_one_line() {
        let mut out = Vec::new();
        let invocation = Invocation::new(vec!["ignored".to_string()]).with_json(true);
        command().run(&invocation, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["command"], "version");
        assert_eq!(json["data"]["version"], "dev_20170302");
    }
}
