#![cfg(test)]

// Property tests kept inside the crate so they can use the small
// capacity schedules that make growth happen within a few dozen inserts.

use crate::error::InsertError;
use crate::hash_sym_table::HashSymTable;
use crate::list_sym_table::ListSymTable;
use crate::schedule::CapacitySchedule;
use crate::sym_table::SymbolTable;
use hashbrown::HashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::BTreeMap;

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter scripts.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, Option<i32>),
    Replace(usize, Option<i32>),
    Remove(usize),
    Get(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=40).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            4 => (idx.clone(), proptest::option::of(any::<i32>())).prop_map(|(i, v)| Op::Insert(i, v)),
            1 => (idx.clone(), proptest::option::of(any::<i32>())).prop_map(|(i, v)| Op::Replace(i, v)),
            1 => idx.clone().prop_map(Op::Remove),
            1 => idx.prop_map(Op::Get),
            1 => "[a-z]{0,4}".prop_map(Op::Contains),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against a model map. After every operation:
// - len/is_empty agree with the model;
// - a key bound to None is still reported present.
fn run_against_model<T>(sut: &mut T, pool: &[String], ops: Vec<Op>) -> Result<(), TestCaseError>
where
    T: SymbolTable<Option<i32>>,
{
    let mut model: HashMap<String, Option<i32>> = HashMap::new();
    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = &pool[i];
                match sut.insert(k, v) {
                    Ok(()) => {
                        prop_assert!(!model.contains_key(k), "insert must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(model.contains_key(k), "duplicate error only when key exists");
                    }
                    Err(e) => prop_assert!(false, "unexpected insert error: {}", e),
                }
            }
            Op::Replace(i, v) => {
                let k = &pool[i];
                let expected = model.get_mut(k).map(|slot| std::mem::replace(slot, v));
                prop_assert_eq!(sut.replace(k, v), expected);
            }
            Op::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains_key(k));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            Op::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            Op::Iterate => {
                let mut seen = BTreeMap::new();
                let mut repeats = 0;
                sut.for_each(|k, v| {
                    if seen.insert(k.to_string(), *v).is_some() {
                        repeats += 1;
                    }
                });
                prop_assert_eq!(repeats, 0);
                let expected: BTreeMap<String, Option<i32>> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

static TINY_STEPS: [usize; 4] = [2, 5, 11, 23];

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_hash_table_matches_model((pool, ops) in arb_scenario()) {
        let mut sut: HashSymTable<Option<i32>> = HashSymTable::new();
        run_against_model(&mut sut, &pool, ops)?;
    }

    // Growth happens several times within a scenario and the final step is
    // regularly overrun, so chains get long.
    #[test]
    fn prop_hash_table_with_tiny_schedule_matches_model((pool, ops) in arb_scenario()) {
        let schedule = CapacitySchedule::new(&TINY_STEPS).unwrap();
        let mut sut: HashSymTable<Option<i32>> = HashSymTable::with_schedule(schedule);
        run_against_model(&mut sut, &pool, ops)?;
        let step = sut.growth_step();
        prop_assert_eq!(schedule.get(step), Some(sut.bucket_count()));
    }

    #[test]
    fn prop_list_table_matches_model((pool, ops) in arb_scenario()) {
        let mut sut: ListSymTable<Option<i32>> = ListSymTable::new();
        run_against_model(&mut sut, &pool, ops)?;
    }

    // Growth only ever moves forward and always lands on a scheduled size.
    #[test]
    fn prop_growth_step_is_monotonic(keys in proptest::collection::hash_set("[a-z]{1,6}", 0..80)) {
        let schedule = CapacitySchedule::new(&TINY_STEPS).unwrap();
        let mut sut: HashSymTable<usize> = HashSymTable::with_schedule(schedule);
        let mut last = 0;
        for (i, k) in keys.iter().enumerate() {
            let before = sut.len();
            sut.insert(k, i).unwrap();
            prop_assert!(sut.growth_step() >= last);
            if sut.growth_step() > last {
                prop_assert_eq!(before, schedule.get(last).unwrap());
            }
            last = sut.growth_step();
        }
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(sut.get(k), Some(&i));
        }
    }
}
