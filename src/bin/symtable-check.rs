//! Runs the scripted symbol table checks against both implementations and
//! exits non-zero if any expectation fails. Set `RUST_LOG=symtable=trace`
//! to see the growth steps taken during the bulk check.

use std::process::ExitCode;
use symtable::verify::{self, Report};
use symtable::{logger, HashSymTable, ListSymTable};

// Enough keys to push the default schedule through two growth steps.
const GROWTH_KEYS: usize = 2_000;

fn print(name: &str, report: &Report) {
    println!("------------------------------------------------------");
    println!("{name}");
    println!("{report}");
}

fn main() -> ExitCode {
    logger::initialize_logger();
    let hash = verify::run_all(HashSymTable::new, GROWTH_KEYS);
    print("HashSymTable", &hash);
    let list = verify::run_all(ListSymTable::new, GROWTH_KEYS);
    print("ListSymTable", &list);

    if hash.passed() && list.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
