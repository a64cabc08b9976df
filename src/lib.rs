#![doc(test(attr(deny(warnings))))]

//! Net-worth dashboard core: read-only access to account and snapshot data,
//! net-worth derivation, sortable category tables and the terminal front end
//! that renders them.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static STARTUP: Once = Once::new();

/// Installs the tracing subscriber and logs which build is running.
pub fn init() {
    STARTUP.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            build = %build.summary(),
            target = build.target,
            "networth dashboard starting"
        );
    });
}
