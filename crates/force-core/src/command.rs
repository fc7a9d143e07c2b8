//! Contract between commands and the dispatcher

use std::io::Write;

use crate::error::ForceError;

/// Static description of a command, used for routing and help
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name the command is invoked by
    pub name: &'static str,
    /// Usage line, without the program name
    pub usage: &'static str,
    /// One-line summary shown in command listings
    pub short: &'static str,
    /// Help block shown by `force help <name>`
    pub long: &'static str,
}

/// A single invocation as routed by the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Raw arguments following the command name
    pub args: Vec<String>,
    /// Emit JSON instead of plain text
    pub json: bool,
}

impl Invocation {
    pub fn new(args: Vec<String>) -> Self {
        Self { args, json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// A command that can be placed in a [`crate::Registry`]
pub trait Command {
    fn spec(&self) -> &CommandSpec;

    /// Execute the command, writing user-facing output to `out`
    fn run(&self, invocation: &Invocation, out: &mut dyn Write) -> Result<(), ForceError>;
}
