use proptest::prelude::*;
use scss::{permutation::SubsetPermutation, Subset};
use std::collections::HashSet;

fn perm(n: usize, elements: &[u64]) -> SubsetPermutation {
    SubsetPermutation::new(&Subset::new(n, elements.to_vec()).unwrap())
}

/// Applies the product of `cycles` to `x`.
fn apply_cycles(cycles: &[Vec<u64>], x: u64) -> u64 {
    for cycle in cycles {
        if let Some(k) = cycle.iter().position(|&y| y == x) {
            return cycle[(k + 1) % cycle.len()];
        }
    }
    x
}

#[test]
fn disjoint_target_gives_transpositions() {
    let p = perm(4, &[2, 4, 6, 8]);
    assert_eq!(p.mapping(), vec![(0, 2), (1, 4), (2, 6), (3, 8)]);
    assert_eq!(p.to_string(), "0 -> 2, 1 -> 4, 2 -> 6, 3 -> 8");

    // 0 -> 2 -> 6 leaves the domain; so do 1 -> 4 and 3 -> 8.
    assert_eq!(p.cycles(), vec![vec![0, 2, 6], vec![1, 4], vec![3, 8]]);
}

#[test]
fn identity_has_no_cycles() {
    assert!(perm(3, &[0, 1, 2]).cycles().is_empty());
}

#[test]
fn closed_cycle_inside_domain() {
    let p = perm(3, &[1, 2, 0]);
    assert_eq!(p.cycles(), vec![vec![0, 1, 2]]);
}

#[test]
fn fixed_points_are_skipped() {
    let p = perm(3, &[0, 5, 2]);
    assert_eq!(p.cycles(), vec![vec![1, 5]]);
    assert_eq!(p.apply(5), 1);
    assert_eq!(p.apply(7), 7);
}

#[test]
fn single_element() {
    assert!(perm(2, &[0]).cycles().is_empty());
    assert_eq!(perm(2, &[3]).cycles(), vec![vec![0, 3]]);
}

proptest! {
    #[test]
    fn cycles_realise_mapping(
        n in 1usize..7,
        raw in prop::collection::vec(any::<u64>(), 1..20),
    ) {
        let bound = 1u64 << n;
        let mut seen = HashSet::new();
        let elements: Vec<u64> = raw
            .into_iter()
            .map(|x| x % bound)
            .filter(|x| seen.insert(*x))
            .collect();
        let p = perm(n, &elements);
        let cycles = p.cycles();

        let mut all = HashSet::new();
        for cycle in &cycles {
            prop_assert!(cycle.len() >= 2);
            for &x in cycle {
                prop_assert!(all.insert(x), "element {} in two cycles", x);
            }
        }

        for (i, &c) in elements.iter().enumerate() {
            prop_assert_eq!(apply_cycles(&cycles, i as u64), c);
        }
        for x in 0..bound {
            prop_assert_eq!(apply_cycles(&cycles, x), p.apply(x));
        }
    }
}
