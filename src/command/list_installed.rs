use crate::command::{Context, PortalCommand};
use crate::config::PortalConfig;
use crate::error::{ESResult, PortalError};
use error_stack::ResultExt;
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;

/// List all installed JVMs.
#[derive(Debug)]
pub struct ListInstalled {
    jdks_dir: PathBuf,
}

impl ListInstalled {
    pub fn new(config: &PortalConfig) -> Self {
        ListInstalled {
            jdks_dir: config.resolve_jdks_dir(),
        }
    }
}

impl PortalCommand for ListInstalled {
    fn run(&self, _context: Context<'_>) -> ESResult<(), PortalError> {
        let mut installed = Vec::new();
        if self.jdks_dir.is_dir() {
            let entries = std::fs::read_dir(&self.jdks_dir)
                .change_context(PortalError::Unexpected)
                .attach_printable_lazy(|| {
                    format!("Failed to read JDK directory {:?}", self.jdks_dir)
                })?;
            for entry in entries {
                let entry = entry
                    .change_context(PortalError::Unexpected)
                    .attach_printable_lazy(|| {
                        format!("Failed to read JDK directory {:?}", self.jdks_dir)
                    })?;
                if entry.path().is_dir() {
                    installed.push(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }

        if installed.is_empty() {
            println!("No JVMs installed.");
            return Ok(());
        }

        installed.sort();

        eprintln!("Installed JVMs:");
        for jdk in installed {
            println!("- {}", jdk.if_supports_color(Stream::Stdout, |s| s.cyan()));
        }

        Ok(())
    }
}
