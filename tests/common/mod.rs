#![allow(dead_code)]

use stepmap::IntervalStore;

/// Keys sampled by the property tests lie in `-KEY_SPAN..=KEY_SPAN`.
pub const KEY_SPAN: i64 = 20;

/// Keys probed when comparing against the reference model.
pub fn probe_keys() -> impl Iterator<Item = i64> {
    (-KEY_SPAN - 2)..=(KEY_SPAN + 2)
}

/// Brute-force reference: replays the accepted assignments newest-first.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    base: char,
    assignments: Vec<(i64, i64, char)>,
}

impl ReferenceModel {
    pub fn new(base: char) -> Self {
        Self {
            base,
            assignments: Vec::new(),
        }
    }

    pub fn record(&mut self, begin: i64, end: i64, value: char) {
        if begin < end {
            self.assignments.push((begin, end, value));
        }
    }

    pub fn value_at(&self, key: i64) -> char {
        self.assignments
            .iter()
            .rev()
            .find(|(begin, end, _)| *begin <= key && key < *end)
            .map(|(_, _, value)| *value)
            .unwrap_or(self.base)
    }
}

/// Apply assignments to a fresh store, mirroring accepted ones into a model.
pub fn build(base: char, ops: &[(i64, i64, char)]) -> (IntervalStore<i64, char>, ReferenceModel) {
    let mut store = IntervalStore::new(base);
    let mut model = ReferenceModel::new(base);
    for &(begin, end, value) in ops {
        if store.assign(begin, end, value).is_ok() {
            model.record(begin, end, value);
        }
    }
    (store, model)
}

/// Maximal runs `(begin, end, value)` of equal values over the probe keys.
pub fn runs(store: &IntervalStore<i64, char>) -> Vec<(i64, i64, char)> {
    let mut runs: Vec<(i64, i64, char)> = Vec::new();
    for key in probe_keys() {
        let value = *store.lookup(&key);
        match runs.last_mut() {
            Some(run) if run.2 == value => run.1 = key + 1,
            _ => runs.push((key, key + 1, value)),
        }
    }
    runs
}
