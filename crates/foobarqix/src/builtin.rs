use crate::prelude::*;
use foobarqix_core::Policy;

#[derive(Debug, clap::Parser)]
pub struct App {
    /// A positive integer (e.g., "15" or "007")
    pub input: String,
}

/// Module entry point
pub fn run(policy: Policy, app: App, global: crate::Global) -> Result<()> {
    log::debug!("Using built-in policy {:?}", policy);

    let composer = policy.composer();
    crate::output::classify_and_print(&composer, app.input, &global)
}
