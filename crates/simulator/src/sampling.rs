use crate::statevector::StateVector;
use rayon::prelude::*;
use rng::ONDRng;
use std::collections::BTreeMap;

/// Computational-basis measurement of every qubit, `shots` times.
///
/// Shot `i` draws from its own generator seeded `"{seed}-shot-{i}"`, so the
/// counts do not depend on how rayon schedules the shots.
pub fn sample_counts(psi: &StateVector, shots: usize, seed: &str) -> BTreeMap<u64, usize> {
    let mut cumulative = Vec::with_capacity(psi.amplitudes().len());
    let mut acc = 0.0;
    for p in psi.probabilities() {
        acc += p;
        cumulative.push(acc);
    }
    let total = acc;
    let last = cumulative.len() - 1;

    let outcomes: Vec<u64> = (0..shots)
        .into_par_iter()
        .map(|s| {
            let seed_str = format!("{}-shot-{}", seed, s);
            let mut rng = ONDRng::new(seed_str.as_bytes());
            let x = rng.next_f64(b"MEASURE_ALL") * total;
            cumulative.partition_point(|&c| c <= x).min(last) as u64
        })
        .collect();

    let mut counts = BTreeMap::new();
    for x in outcomes {
        *counts.entry(x).or_insert(0) += 1;
    }
    counts
}
