use derive_more::Display;
use error_stack::Report;
use std::error::Error;
use tracing::debug;

use crate::api::adoptium::AdoptiumVersionSource;
use crate::command::{
    Context, DebugAnimation, Help, ListInstallable, ListInstalled, PortalCommand,
};
use crate::config::PortalConfig;
use crate::error::{ESResult, PortalError, UserMessage};
use crate::registry::CommandRegistry;

#[derive(Debug, Display)]
pub enum DispatchError {
    #[display("Malformed value for --{flag}: {value:?}")]
    InvalidFlagValue { flag: &'static str, value: String },
    #[display("Missing value for --{flag}")]
    MissingFlagValue { flag: &'static str },
    #[display("No command to run, use \"portal help\" to get usage info")]
    NoCommand,
    #[display("Unknown command {name:?}, use \"portal help\" to get usage info")]
    UnknownCommand { name: String },
}

impl Error for DispatchError {}

/// One invocation's worth of recognized input. Anything the parser does not
/// recognize is tolerated, not rejected.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub version: bool,
    pub hello_world: bool,
    pub level: Option<i32>,
    pub command: Option<String>,
}

pub fn parse_invocation(args: &[String]) -> ESResult<ParsedInvocation, DispatchError> {
    let mut invocation = ParsedInvocation::default();
    let mut iter = args.iter();
    while let Some(token) = iter.next() {
        if let Some(flag) = token.strip_prefix("--") {
            let (name, inline_value) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };
            match name {
                "version" => invocation.version = true,
                "hello-world" => invocation.hello_world = true,
                "level" => {
                    let value = take_value("level", inline_value, &mut iter)?;
                    match value.parse::<i32>() {
                        Ok(level) => invocation.level = Some(level),
                        Err(_) => {
                            return Err(Report::new(DispatchError::InvalidFlagValue {
                                flag: "level",
                                value,
                            }));
                        }
                    }
                }
                "command" => {
                    let value = take_value("command", inline_value, &mut iter)?;
                    invocation.command.get_or_insert(value);
                }
                _ => debug!("ignoring unrecognized flag --{}", name),
            }
        } else if invocation.command.is_none() {
            invocation.command = Some(token.clone());
        } else {
            debug!("ignoring extra positional token {:?}", token);
        }
    }
    Ok(invocation)
}

fn take_value(
    flag: &'static str,
    inline_value: Option<String>,
    iter: &mut std::slice::Iter<'_, String>,
) -> ESResult<String, DispatchError> {
    if let Some(value) = inline_value {
        return Ok(value);
    }
    match iter.next() {
        Some(value) => Ok(value.clone()),
        None => Err(Report::new(DispatchError::MissingFlagValue { flag })),
    }
}

/// A flag the parser knows about, described for help rendering.
pub struct OptionDescriptor {
    pub name: &'static str,
    pub parameter: Option<&'static str>,
    pub description: &'static str,
    pub hidden: bool,
}

impl OptionDescriptor {
    pub fn display_name(&self) -> String {
        match self.parameter {
            Some(parameter) => format!("--{} [{}]", self.name, parameter),
            None => format!("--{}", self.name),
        }
    }
}

fn default_options() -> Vec<OptionDescriptor> {
    vec![
        OptionDescriptor {
            name: "version",
            parameter: None,
            description: "Print the version number",
            hidden: false,
        },
        OptionDescriptor {
            name: "hello-world",
            parameter: None,
            description: "Print hello world message to the screen",
            hidden: false,
        },
        OptionDescriptor {
            name: "level",
            parameter: Some("int"),
            description: "Echo an integer level, for diagnostics",
            hidden: false,
        },
        OptionDescriptor {
            name: "command",
            parameter: Some("name"),
            description: "Explicit form of the positional command",
            hidden: true,
        },
    ]
}

/// Routes one parsed invocation to its command.
///
/// Owns the registry; constructed once at process start and discarded at
/// exit.
pub struct Dispatcher {
    registry: CommandRegistry,
    options: Vec<OptionDescriptor>,
}

impl Dispatcher {
    pub fn new() -> ESResult<Dispatcher, PortalError> {
        let config = PortalConfig::load()?;
        let mut registry = CommandRegistry::new();
        registry.register("help", "Print help message", Help.into());
        registry.register(
            "list",
            "List all installed JVMs",
            ListInstalled::new(&config).into(),
        );
        registry.register(
            "installable",
            "List available versions of JVM online",
            ListInstallable::new(Box::new(AdoptiumVersionSource::new(&config))).into(),
        );
        registry.register(
            "ani-debug",
            "Run the loading animation for a few seconds",
            DebugAnimation.into(),
        );
        Ok(Dispatcher::with_registry(registry))
    }

    pub fn with_registry(registry: CommandRegistry) -> Dispatcher {
        Dispatcher {
            registry,
            options: default_options(),
        }
    }

    pub fn dispatch(&self, args: &[String]) -> ESResult<(), PortalError> {
        let invocation = parse_invocation(args).map_err(into_user_error)?;

        if invocation.version {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if invocation.hello_world {
            println!("Hello World!");
        }

        if let Some(level) = invocation.level {
            println!("Level is set to {}", level);
        }

        let Some(name) = invocation.command else {
            return Err(into_user_error(Report::new(DispatchError::NoCommand)));
        };
        let Some(command) = self.registry.lookup(&name) else {
            return Err(into_user_error(Report::new(DispatchError::UnknownCommand {
                name,
            })));
        };
        // A failure inside the action propagates under its own message; only
        // a failed lookup maps to the unknown-command message.
        command.action.run(Context {
            registry: &self.registry,
            options: &self.options,
        })
    }
}

fn into_user_error(report: Report<DispatchError>) -> Report<PortalError> {
    let message = report.current_context().to_string();
    report
        .change_context(PortalError::UserError)
        .attach(UserMessage { message })
}
