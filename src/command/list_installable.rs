use crate::api::def::RemoteVersionSource;
use crate::command::{Context, PortalCommand};
use crate::error::{ESResult, PortalError, UserMessage};
use crate::progress::ProgressIndicator;
use error_stack::Report;
use itertools::Itertools;
use owo_colors::{OwoColorize, Stream};

/// List available versions of JVM online.
///
/// Runs the spinner on a background thread while the fetch blocks this one;
/// the indicator is stopped on both branches before anything is printed.
pub struct ListInstallable {
    source: Box<dyn RemoteVersionSource>,
}

impl ListInstallable {
    pub fn new(source: Box<dyn RemoteVersionSource>) -> Self {
        ListInstallable { source }
    }
}

impl PortalCommand for ListInstallable {
    fn run(&self, _context: Context<'_>) -> ESResult<(), PortalError> {
        let mut indicator = ProgressIndicator::new();
        indicator.start("fetching...");
        let result = self.source.fetch_available();
        indicator.stop();

        match result {
            Ok(versions) => {
                println!(
                    "{}",
                    "Available versions:".if_supports_color(Stream::Stdout, |s| s.bold())
                );
                println!();
                println!("{}", render_bullets(&versions));
                println!();
                println!(
                    "Use {} to install a JVM",
                    "portal add <version>".if_supports_color(Stream::Stdout, |s| s.bold())
                );
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                Err(Report::new(error)
                    .change_context(PortalError::UserError)
                    .attach(UserMessage { message }))
            }
        }
    }
}

fn render_bullets(versions: &[String]) -> String {
    format!(" * {}", versions.iter().join("\n * "))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bullets_preserve_source_order() {
        let versions = vec!["21.0.0".to_string(), "17.0.1".to_string()];
        assert_eq!(render_bullets(&versions), " * 21.0.0\n * 17.0.1");
    }
}
