use crate::dispatch::OptionDescriptor;
use crate::error::{ESResult, PortalError};
use crate::registry::CommandRegistry;
use enum_dispatch::enum_dispatch;

pub(super) mod debug_animation;
pub(super) mod help;
pub(super) mod list_installable;
pub(super) mod list_installed;

pub use debug_animation::DebugAnimation;
pub use help::Help;
pub use list_installable::ListInstallable;
pub use list_installed::ListInstalled;

#[enum_dispatch]
pub trait PortalCommand {
    fn run(&self, context: Context<'_>) -> ESResult<(), PortalError>;
}

#[enum_dispatch(PortalCommand)]
pub enum CommandAction {
    Help(Help),
    ListInstalled(ListInstalled),
    ListInstallable(ListInstallable),
    DebugAnimation(DebugAnimation),
}

/// What a running action may consult: the registry it was resolved from and
/// the option descriptors, both needed by help rendering.
pub struct Context<'a> {
    pub registry: &'a CommandRegistry,
    pub options: &'a [OptionDescriptor],
}
