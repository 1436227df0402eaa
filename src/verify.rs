//! Scripted correctness checks runnable against any [`SymbolTable`].
//!
//! Each check records the source line of every failed expectation, so a
//! report reads like "check `replace` failed at line N: ...". Values are
//! `Option<&'static str>` so that a key bound to nothing can be exercised.

use crate::error::InsertError;
use crate::sym_table::SymbolTable;
use core::fmt;
use core::panic::Location;

pub type Value = Option<&'static str>;

const SHORTSTOP: &str = "Shortstop";
const CENTER_FIELD: &str = "Center Field";
const FIRST_BASE: &str = "First Base";
const RIGHT_FIELD: &str = "Right Field";

/// One failed expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub check: &'static str,
    pub line: u32,
    pub detail: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check `{}` failed at line {}: {}",
            self.check, self.line, self.detail
        )
    }
}

/// Outcome of [`run_all`].
#[derive(Debug, Default)]
pub struct Report {
    pub expectations: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mismatches {
            writeln!(f, "{m}")?;
        }
        write!(
            f,
            "{} of {} expectations held",
            self.expectations - self.mismatches.len(),
            self.expectations
        )
    }
}

struct Checker<'r> {
    report: &'r mut Report,
    check: &'static str,
}

impl Checker<'_> {
    #[track_caller]
    fn assure(&mut self, ok: bool, detail: impl FnOnce() -> String) {
        self.report.expectations += 1;
        if !ok {
            self.report.mismatches.push(Mismatch {
                check: self.check,
                line: Location::caller().line(),
                detail: detail(),
            });
        }
    }

    #[track_caller]
    fn eq<T: PartialEq + fmt::Debug>(&mut self, got: T, want: T) {
        let ok = got == want;
        self.assure(ok, || format!("got {got:?}, expected {want:?}"));
    }
}

/// Run every check against fresh tables from `make`. `growth_keys` is the
/// number of distinct keys the bulk check inserts; pick it large enough to
/// push a hash table through several growth steps.
pub fn run_all<T, F>(make: F, growth_keys: usize) -> Report
where
    T: SymbolTable<Value>,
    F: Fn() -> T,
{
    let mut report = Report::default();
    check_basic(&mut Checker { report: &mut report, check: "basic" }, make());
    check_replace(&mut Checker { report: &mut report, check: "replace" }, make());
    check_empty_value(&mut Checker { report: &mut report, check: "empty value" }, make());
    check_remove(&mut Checker { report: &mut report, check: "remove" }, make());
    check_for_each(&mut Checker { report: &mut report, check: "for each" }, make());
    check_bulk(
        &mut Checker { report: &mut report, check: "bulk" },
        make(),
        growth_keys,
    );
    report
}

fn roster<T: SymbolTable<Value>>(c: &mut Checker<'_>, t: &mut T) {
    for (i, (k, v)) in [
        ("Jeter", SHORTSTOP),
        ("Mantle", CENTER_FIELD),
        ("Gehrig", FIRST_BASE),
        ("Ruth", RIGHT_FIELD),
    ]
    .into_iter()
    .enumerate()
    {
        c.eq(t.insert(k, Some(v)), Ok(()));
        c.eq(t.len(), i + 1);
    }
}

fn check_basic<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T) {
    c.eq(t.len(), 0);
    c.assure(t.is_empty(), || "new table is not empty".into());
    roster(c, &mut t);

    c.eq(t.insert("Jeter", Some(CENTER_FIELD)), Err(InsertError::DuplicateKey));
    c.eq(t.len(), 4);
    c.eq(t.insert("Ruth", Some(CENTER_FIELD)), Err(InsertError::DuplicateKey));
    c.eq(t.len(), 4);

    for k in ["Jeter", "Mantle", "Gehrig", "Ruth"] {
        c.assure(t.contains_key(k), || format!("{k} missing"));
    }
    for k in ["Clemens", "Maris"] {
        c.assure(!t.contains_key(k), || format!("{k} unexpectedly present"));
    }

    c.eq(t.get("Jeter"), Some(&Some(SHORTSTOP)));
    c.eq(t.get("Mantle"), Some(&Some(CENTER_FIELD)));
    c.eq(t.get("Gehrig"), Some(&Some(FIRST_BASE)));
    c.eq(t.get("Ruth"), Some(&Some(RIGHT_FIELD)));
    c.eq(t.get("Clemens"), None);
    c.eq(t.get("Maris"), None);
}

fn check_replace<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T) {
    roster(c, &mut t);
    c.eq(t.replace("Mantle", Some(FIRST_BASE)), Some(Some(CENTER_FIELD)));
    c.eq(t.len(), 4);
    c.eq(t.get("Mantle"), Some(&Some(FIRST_BASE)));

    c.eq(t.replace("Clemens", Some(RIGHT_FIELD)), None);
    c.eq(t.replace("Maris", Some(RIGHT_FIELD)), None);
    c.eq(t.len(), 4);
    c.assure(!t.contains_key("Clemens"), || "replace bound an absent key".into());
}

fn check_empty_value<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T) {
    roster(c, &mut t);
    c.eq(t.insert("Brown", None), Ok(()));
    c.eq(t.len(), 5);
    c.eq(t.insert("Brown", Some(SHORTSTOP)), Err(InsertError::DuplicateKey));
    c.eq(t.len(), 5);

    c.assure(t.contains_key("Brown"), || "empty-valued key missing".into());
    c.eq(t.get("Brown"), Some(&None));
    c.assure(!t.contains_key("Berra"), || "unbound key reported present".into());
    c.eq(t.get("Berra"), None);
    c.eq(t.replace("Brown", Some(SHORTSTOP)), Some(None));
}

fn check_remove<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T) {
    roster(c, &mut t);
    c.eq(t.remove("Gehrig"), Some(Some(FIRST_BASE)));
    c.eq(t.len(), 3);
    c.assure(!t.contains_key("Gehrig"), || "removed key still present".into());
    c.eq(t.remove("Gehrig"), None);
    c.eq(t.remove("Clemens"), None);
    c.eq(t.len(), 3);
    c.eq(t.insert("Gehrig", Some(RIGHT_FIELD)), Ok(()));
    c.eq(t.get("Gehrig"), Some(&Some(RIGHT_FIELD)));

    for k in ["Jeter", "Mantle", "Ruth", "Gehrig"] {
        let removed = t.remove(k);
        c.assure(removed.is_some(), || format!("{k} not removable"));
    }
    c.assure(t.is_empty(), || format!("{} bindings left", t.len()));
}

fn check_for_each<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T) {
    c.eq(t.insert("Jeter", Some("Shortstop")), Ok(()));
    c.eq(t.insert("Mantle", Some("CenterField")), Ok(()));
    let mut seen: Vec<(String, Value)> = Vec::new();
    t.for_each(|k, v| seen.push((k.to_string(), *v)));
    seen.sort();
    c.eq(
        seen,
        vec![
            ("Jeter".to_string(), Some("Shortstop")),
            ("Mantle".to_string(), Some("CenterField")),
        ],
    );
}

fn check_bulk<T: SymbolTable<Value>>(c: &mut Checker<'_>, mut t: T, n: usize) {
    const POSITIONS: [&str; 4] = [SHORTSTOP, CENTER_FIELD, FIRST_BASE, RIGHT_FIELD];
    let key = |i: usize| format!("player{i}");
    let value = |i: usize| (i % 5 != 0).then(|| POSITIONS[i % POSITIONS.len()]);

    let mut failed_inserts = 0;
    for i in 0..n {
        if t.insert(&key(i), value(i)).is_err() {
            failed_inserts += 1;
        }
    }
    c.eq(failed_inserts, 0);
    c.eq(t.len(), n);

    let wrong = (0..n).filter(|&i| t.get(&key(i)) != Some(&value(i))).count();
    c.eq(wrong, 0);
    c.assure(!t.contains_key(&key(n)), || "never-inserted key present".into());

    let mut visited = 0;
    t.for_each(|_, _| visited += 1);
    c.eq(visited, n);
}
