use crate::command::{Context, PortalCommand};
use crate::error::{ESResult, PortalError};
use crate::progress::ProgressIndicator;
use std::time::Duration;

const DEMO_DURATION: Duration = Duration::from_secs(3);

/// Run the loading animation for a few seconds, to eyeball rendering changes.
#[derive(Debug)]
pub struct DebugAnimation;

impl PortalCommand for DebugAnimation {
    fn run(&self, _context: Context<'_>) -> ESResult<(), PortalError> {
        let mut indicator = ProgressIndicator::new();
        indicator.start("Debugging animation...");
        std::thread::sleep(DEMO_DURATION);
        indicator.stop();
        Ok(())
    }
}
