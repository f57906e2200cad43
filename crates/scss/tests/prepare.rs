use scss::{gates::Gate, grover_rudolph::GroverRudolphCircuit, prepare, ScssError, Subset};

#[test]
fn grover_rudolph_layout() {
    let c = GroverRudolphCircuit::new(5).unwrap().build(3).unwrap();
    assert_eq!(c.len(), 4);
    assert!(c.ops.iter().all(|op| matches!(op.gate, Gate::Ry(_))));

    // level 0 unconditioned, level 1 on bit 0, level 2 on bits 0 and 1
    assert!(c.ops[0].controls.is_empty() && c.ops[0].target == 0);
    assert_eq!(c.ops[1].controls.len(), 1);
    assert_eq!(c.ops[3].target, 2);
    assert_eq!(c.ops[3].controls.len(), 2);

    assert!(matches!(
        GroverRudolphCircuit::new(5).unwrap().build(2),
        Err(ScssError::TooFewQubits { required: 3, .. })
    ));
}

#[test]
fn permutation_stage_realises_mapping() {
    let cases: Vec<(usize, Vec<u64>)> = vec![
        (5, vec![1, 2, 4, 8, 16]),
        (3, vec![2, 0, 1]),
        (3, vec![0, 1, 2]),
        (4, vec![15]),
        (4, vec![3, 9, 12, 1, 0, 7]),
        (2, vec![3, 2, 1, 0]),
    ];

    for (n, elements) in cases {
        let subset = Subset::new(n, elements.clone()).unwrap();
        let prep = prepare(n, &subset).unwrap();

        assert_eq!(prep.circuit.num_qubits, n + 1);
        assert_eq!(prep.ancilla(), n);
        assert_eq!(prep.angles.len(), elements.len() - 1);

        assert_eq!(prep.gr_ops, elements.len() - 1);
        assert!(prep
            .grover_rudolph_stage()
            .ops
            .iter()
            .all(|op| matches!(op.gate, Gate::Ry(_))));

        let stage = prep.permutation_stage();
        for (i, &c) in elements.iter().enumerate() {
            assert_eq!(stage.permute_basis(i as u64), Some(c), "n={} subset={:?}", n, elements);
        }
    }
}

#[test]
fn summary_mentions_sizes() {
    let subset = Subset::new(4, vec![2, 4, 6, 8]).unwrap();
    let prep = prepare(4, &subset).unwrap();
    let summary = prep.summary();
    assert!(summary.starts_with("n=4 card=4 rotations=3 cycles=3"), "{}", summary);
}

#[test]
fn register_width_must_match() {
    let subset = Subset::new(3, vec![1, 2]).unwrap();
    assert!(matches!(
        prepare(4, &subset),
        Err(ScssError::WidthMismatch { subset: 3, register: 4 })
    ));
}
