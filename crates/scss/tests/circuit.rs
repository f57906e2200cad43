use scss::{
    cycle::{gray_code_flips, permutation_circuit, CyclePermutation},
    gates::Gate,
    Circuit, Control, Operation, ScssError,
};

#[test]
fn push_validates_qubits() {
    let mut c = Circuit::new(3);
    assert!(c.push(Operation::x(2)).is_ok());
    assert!(matches!(
        c.push(Operation::x(3)),
        Err(ScssError::QubitOutOfRange { qubit: 3, num_qubits: 3 })
    ));
    assert!(matches!(
        c.push(Operation::cx(1, 1)),
        Err(ScssError::TargetIsControl { qubit: 1 })
    ));
    assert!(c.push(Operation::mcx(vec![Control::on(0), Control::off(5)], 1)).is_err());
    assert!(matches!(
        c.push(Operation::mcx(vec![Control::on(0), Control::off(0)], 1)),
        Err(ScssError::DuplicateControl { qubit: 0 })
    ));
    assert_eq!(c.len(), 1);
}

#[test]
fn widths_beyond_u64_rejected() {
    let mut wide = Circuit::new(70);
    assert!(matches!(
        wide.push(Operation::x(65)),
        Err(ScssError::QubitCount { num_qubits: 70, max: 64 })
    ));
    assert!(wide.is_empty());
    assert_eq!(wide.permute_basis(0), Some(0));

    let mut full = Circuit::new(64);
    full.push(Operation::cx(0, 63)).unwrap();
    assert_eq!(full.permute_basis(1), Some(1 | (1 << 63)));

    // operations placed directly in the op list are not validated by push
    let literal = Circuit {
        num_qubits: 70,
        ops: vec![Operation::x(65)],
    };
    assert_eq!(literal.permute_basis(0), None);
}

#[test]
fn classical_evaluation() {
    let mut c = Circuit::new(3);
    c.push(Operation::x(0)).unwrap();
    c.push(Operation::cx(0, 1)).unwrap();
    c.push(Operation::mcx(vec![Control::on(1), Control::off(2)], 2))
        .unwrap();

    assert_eq!(c.permute_basis(0b000), Some(0b111));
    assert_eq!(c.permute_basis(0b001), Some(0b000));
    assert_eq!(c.permute_basis(0b100), Some(0b111));

    c.push(Operation::ry(0.3, 0)).unwrap();
    assert_eq!(c.permute_basis(0), None);
}

#[test]
fn stats_count_gate_kinds() {
    let mut c = Circuit::new(4);
    c.push(Operation::ry(1.0, 0)).unwrap();
    c.push(Operation::mcry(1.0, vec![Control::off(0)], 1)).unwrap();
    c.push(Operation::mcx(vec![Control::on(0), Control::on(1), Control::off(2)], 3))
        .unwrap();

    let s = c.stats();
    assert_eq!(s.total, 3);
    assert_eq!(s.single_qubit, 1);
    assert_eq!(s.controlled, 2);
    assert_eq!(s.max_controls, 3);
    assert_eq!(s.x_gates, 1);
    assert_eq!(s.ry_gates, 2);
}

#[test]
fn json_and_display() {
    let mut c = Circuit::new(2);
    c.push(Operation::mcry(0.5, vec![Control::off(0)], 1)).unwrap();

    let json = c.to_json().unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    assert_eq!(back.ops[0].gate, Gate::Ry(0.5));

    let text = c.to_string();
    assert!(text.contains("Ry(0.500000) q1 | q0=0"), "{}", text);
}

#[test]
fn gray_code_flips_differing_bits() {
    assert_eq!(gray_code_flips(0b0101, 0b0110, 4), vec![0, 1]);
    assert!(gray_code_flips(7, 7, 3).is_empty());
}

#[test]
fn cycle_maps_each_element_to_next() {
    let n = 4;
    let cycle = vec![0u64, 1, 3, 9];
    let mut c = Circuit::new(n + 1);
    CyclePermutation::new(n, cycle.clone())
        .unwrap()
        .append_to(&mut c)
        .unwrap();

    for x in 0..(1u64 << n) {
        let expected = match cycle.iter().position(|&y| y == x) {
            Some(k) => cycle[(k + 1) % cycle.len()],
            None => x,
        };
        assert_eq!(c.permute_basis(x), Some(expected), "x = {}", x);
    }
}

#[test]
fn product_of_cycles() {
    let n = 3;
    let cycles = vec![vec![0u64, 5], vec![1, 2, 7]];
    let c = permutation_circuit(n, &cycles).unwrap();
    assert_eq!(c.num_qubits, n + 1);

    assert_eq!(c.permute_basis(0), Some(5));
    assert_eq!(c.permute_basis(5), Some(0));
    assert_eq!(c.permute_basis(1), Some(2));
    assert_eq!(c.permute_basis(7), Some(1));
    assert_eq!(c.permute_basis(4), Some(4));
}

#[test]
fn invalid_cycles_rejected() {
    assert!(CyclePermutation::new(3, vec![1]).is_err());
    assert!(CyclePermutation::new(3, vec![1, 8]).is_err());
    assert!(CyclePermutation::new(3, vec![1, 2, 1]).is_err());

    let mut narrow = Circuit::new(3);
    let cycle = CyclePermutation::new(3, vec![1, 2]).unwrap();
    assert!(cycle.append_to(&mut narrow).is_err());
}
