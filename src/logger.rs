//! Logger setup for binaries built on this crate.
//!
//! The library only emits through the `log` facade: growth steps at `trace`,
//! an exhausted capacity schedule at `debug`, failed bucket allocation at
//! `warn`. `RUST_LOG` overrides the defaults, e.g.
//! `RUST_LOG=symtable=trace symtable-check`.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("symtable", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed; keep it.
        let _ = builder.try_init();
    });
}
