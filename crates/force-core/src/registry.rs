//! Explicit command registry handed to the dispatcher at startup

use std::io::Write;

use crate::command::{Command, CommandSpec, Invocation};
use crate::error::ForceError;

/// Ordered set of commands, keyed by name
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. Names must be unique.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), ForceError> {
        let name = command.spec().name;
        if self.get(name).is_some() {
            return Err(ForceError::DuplicateCommand {
                name: name.to_string(),
            });
        }
        self.commands.push(command);
        Ok(())
    }

    /// Builder form of [`Registry::register`]
    pub fn with(mut self, command: Box<dyn Command>) -> Result<Self, ForceError> {
        self.register(command)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.spec().name == name)
            .map(|c| c.as_ref())
    }

    /// Commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Help for a command, without running it
    pub fn help(&self, name: &str) -> Option<&CommandSpec> {
        self.get(name).map(|c| c.spec())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Route an invocation to the named command
    pub fn dispatch(
        &self,
        name: &str,
        invocation: &Invocation,
        out: &mut dyn Write,
    ) -> Result<(), ForceError> {
        let command = self.get(name).ok_or_else(|| ForceError::UnknownCommand {
            name: name.to_string(),
        })?;
        command.run(invocation, out)
    }
}
