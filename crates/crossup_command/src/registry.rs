//! Named command tables.
//!
//! A registry maps names to pre-built commands. The standard table holds
//! the handful of movement commands every character shares; character
//! move lists are content, authored as [`CommandSpec`] records and
//! compiled with [`CommandRegistry::from_specs`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::command::Command;

/// An authored command definition: name, notation, window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Registry key.
    pub name: String,
    /// Command notation, e.g. `"236a"`.
    pub notation: String,
    /// Execution window in frames.
    pub window: u32,
}

/// A small table of named, pre-built commands.
///
/// Iteration preserves insertion order, so a priority-sorted spec list
/// stays priority-sorted here.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<(String, Command)>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard table: forward, back, either horizontal
    /// direction, and guard.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_specs(&[
            spec("forward", "6", 1),
            spec("back", "4", 1),
            spec("horizontal", "4|6", 1),
            spec("guard", "*l", 1),
        ])
    }

    /// Compiles a spec list into a registry.
    ///
    /// Entries that fail to compile are skipped with a warning; authoring
    /// errors should surface when the move table is built, not crash the
    /// match.
    #[must_use]
    pub fn from_specs(specs: &[CommandSpec]) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            match Command::parse(&spec.notation, spec.window) {
                Ok(command) => {
                    debug!(name = %spec.name, notation = %spec.notation, "registered command");
                    registry.insert(spec.name.clone(), command);
                }
                Err(err) => {
                    warn!(name = %spec.name, %err, "skipping command that failed to compile");
                }
            }
        }
        registry
    }

    /// Adds a command under a name, replacing any previous entry.
    pub fn insert(&mut self, name: String, command: Command) {
        if let Some(entry) = self.commands.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = command;
        } else {
            self.commands.push((name, command));
        }
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, command)| command)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.commands
            .iter()
            .map(|(name, command)| (name.as_str(), command))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the registry holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn spec(name: &str, notation: &str, window: u32) -> CommandSpec {
    CommandSpec {
        name: name.to_string(),
        notation: notation.to_string(),
        window,
    }
}
