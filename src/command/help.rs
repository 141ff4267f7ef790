use console::style;

use crate::command::{Context, PortalCommand};
use crate::error::{ESResult, PortalError};

const COLUMN_WIDTH: usize = 20;
const BANNER_WIDTH: usize = 35;

/// Print the banner plus the command and option listings.
#[derive(Debug)]
pub struct Help;

impl PortalCommand for Help {
    fn run(&self, context: Context<'_>) -> ESResult<(), PortalError> {
        print_banner();
        println!("Usage: portal [command] <option>...");
        println!();
        println!("Commands:");
        for command in context.registry.iter() {
            println!("    {}", two_column(command.name, command.description));
        }
        println!();
        println!("Options:");
        for option in context.options.iter().filter(|option| !option.hidden) {
            println!(
                "    {}",
                two_column(&option.display_name(), option.description)
            );
        }
        println!();
        Ok(())
    }
}

fn two_column(left: &str, right: &str) -> String {
    format!("{:<width$} := {}", left, right, width = COLUMN_WIDTH)
}

fn print_banner() {
    let art = [
        r" ____            _        _ ",
        r"|  _ \ ___  _ __| |_ __ _| |",
        r"| |_) / _ \| '__| __/ _` | |",
        r"|  __| (_) | |  | || (_| | |",
        r"|_|   \___/|_|   \__\__,_|_|",
    ];
    for line in art {
        println!("{}", style(line).magenta());
    }
    // Pad before styling so escape codes do not throw off the alignment.
    println!(
        "{}",
        style(format!("{:>width$}", "A version manager for Java", width = BANNER_WIDTH)).magenta()
    );
    println!(
        "{}",
        style(format!(
            "{:>width$}",
            format!("v{}", env!("CARGO_PKG_VERSION")),
            width = BANNER_WIDTH
        ))
        .magenta()
    );
    println!();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_column_pads_short_names() {
        assert_eq!(
            two_column("help", "Print help message"),
            "help                 := Print help message"
        );
    }

    #[test]
    fn two_column_keeps_long_names_intact() {
        let line = two_column("a-rather-long-command-name", "desc");
        assert!(line.starts_with("a-rather-long-command-name := "));
    }
}
