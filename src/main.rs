#![deny(warnings)]

use std::process::ExitCode;

use console::style;
use error_stack::Report;
use tracing_subscriber::EnvFilter;

use crate::dispatch::Dispatcher;
use crate::error::{PortalError, UserMessage};

mod api;
mod command;
mod config;
mod dispatch;
mod error;
mod http_client;
mod progress;
mod registry;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = Dispatcher::new().and_then(|dispatcher| dispatcher.dispatch(&args));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            report_error(&report);
            ExitCode::FAILURE
        }
    }
}

fn report_error(report: &Report<PortalError>) {
    match report.current_context() {
        PortalError::UserError => {
            for message in report
                .frames()
                .filter_map(|frame| frame.downcast_ref::<UserMessage>())
            {
                eprintln!("{}", style(&message.message).for_stderr().red());
            }
        }
        PortalError::Unexpected => {
            eprintln!("{}", style(format!("Error: {:?}", report)).for_stderr().red());
        }
    }
}
