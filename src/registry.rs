use crate::command::CommandAction;

/// A named, described, zero-argument action invocable from the CLI.
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

/// Insertion-ordered command table, built once at startup and read-only
/// afterwards.
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Register a command. Panics on a duplicate name; the registry is
    /// assembled from literals at startup, so a duplicate is a programming
    /// error, not a runtime condition.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        action: CommandAction,
    ) {
        assert!(
            self.lookup(name).is_none(),
            "command {:?} registered twice",
            name
        );
        self.commands.push(Command {
            name,
            description,
            action,
        });
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Commands in registration order, for help rendering.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::command::Help;

    fn registry_with(names: &[&'static str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(name, "test command", Help.into());
        }
        registry
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let registry = registry_with(&["help", "list"]);
        assert!(registry.lookup("help").is_some());
        assert!(registry.lookup("HELP").is_none());
        assert!(registry.lookup("hel").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let registry = registry_with(&["zeta", "alpha", "mid"]);
        let names: Vec<&str> = registry.iter().map(|command| command.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        // Restartable: a second pass sees the same sequence.
        let again: Vec<&str> = registry.iter().map(|command| command.name).collect();
        assert_eq!(names, again);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_registration_panics() {
        registry_with(&["help", "help"]);
    }
}
