//! Differential test: drive the table and a `hashbrown::HashMap` with
//! the same random operation stream and require identical observable
//! behavior after every step.

extern crate std;

use hashbrown::HashMap;
use rand::Rng;

use crate::probing::{ProbingTable, TableError};

const CAPACITY: usize = 64;
const KEY_SPACE: i64 = 96;
const STEPS: usize = 10_000;

#[test]
fn test_matches_hashmap_model() {
    let mut table: ProbingTable<u32, CAPACITY> = ProbingTable::new();
    let mut model: HashMap<i64, u32> = HashMap::new();
    let mut rng = rand::rng();

    for step in 0..STEPS {
        let key = rng.random_range(0..KEY_SPACE);
        match rng.random_range(0..3u8) {
            0 => {
                let value = step as u32;
                match table.insert(key, value) {
                    Ok(previous) => {
                        assert_eq!(previous, model.insert(key, value), "step {step}");
                    }
                    Err(TableError::CapacityExceeded) => {
                        assert_eq!(model.len(), CAPACITY, "step {step}");
                        assert!(!model.contains_key(&key), "step {step}");
                    }
                    Err(err) => panic!("unexpected error {err} at step {step}"),
                }
            }
            1 => match table.remove(key) {
                Ok(value) => assert_eq!(Some(value), model.remove(&key), "step {step}"),
                Err(TableError::KeyNotFound(_)) => {
                    assert!(!model.contains_key(&key), "step {step}");
                }
                Err(err) => panic!("unexpected error {err} at step {step}"),
            },
            _ => {
                assert_eq!(table.get(key).ok(), model.get(&key), "step {step}");
            }
        }

        assert_eq!(table.len(), model.len(), "step {step}");

        // The probing invariant: every stored key stays reachable.
        for (&key, value) in &model {
            assert_eq!(table.get(key), Ok(value), "step {step}, key {key}");
        }
    }
}
