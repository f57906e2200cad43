use scss::{prepare, Subset, SubsetGenerator};
use simulator::{entanglement_profile, sample_counts, verify};
use tn::truncation::Truncation;

#[test]
fn ghz_subset_profile() {
    let n = 4;
    let subset = Subset::new(n, vec![0, (1 << n) - 1]).unwrap();
    let v = verify(&prepare(n, &subset).unwrap()).unwrap();

    let profile = entanglement_profile(&v.state, Truncation::exact()).unwrap();
    // last bond separates the untouched ancilla
    assert_eq!(profile.bond_dims, vec![2, 2, 2, 1]);
    for s in &profile.entropies[..3] {
        assert!((s - 1.0).abs() < 1e-9, "entropies = {:?}", profile.entropies);
    }
    assert!(profile.entropies[3].abs() < 1e-9);
}

#[test]
fn w_subset_has_bond_two() {
    let n = 5;
    let subset = SubsetGenerator::new(n, n).powers_of_two().unwrap();
    let v = verify(&prepare(n, &subset).unwrap()).unwrap();

    let profile = entanglement_profile(&v.state, Truncation::exact()).unwrap();
    assert_eq!(profile.chi_max(), 2);
    assert_eq!(profile.bond_dims[n - 1], 1);
}

#[test]
fn sampled_outcomes_stay_in_subset() {
    let n = 4;
    let subset = Subset::new(n, vec![3, 9, 12]).unwrap();
    let v = verify(&prepare(n, &subset).unwrap()).unwrap();

    let counts = sample_counts(&v.state, 600, "subset");
    assert_eq!(counts.len(), 3, "counts = {:?}", counts);
    for (x, c) in &counts {
        assert!(subset.contains(*x));
        assert!(*c > 120, "x={} count={}", x, c);
    }
}
