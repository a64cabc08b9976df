pub mod config;
pub mod dashboard;
pub mod snapshot;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in dashboard::definitions()
        .into_iter()
        .chain(snapshot::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
