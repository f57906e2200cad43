use rng::ONDRng;
use scss::{prepare, SubsetGenerator};
use simulator::{
    benchmark,
    output::{write_counts_csv, write_rows_csv},
};
use std::collections::BTreeMap;
use std::fs;

#[test]
fn benchmark_builds_and_verifies() {
    let report = benchmark(3, 4, "s").unwrap();
    assert_eq!(report.num_qubits, 3);
    assert_eq!(report.card, 4);
    assert!((report.fidelity - 1.0).abs() < 1e-10, "fidelity {}", report.fidelity);
    assert!(report.build_secs >= 0.0 && report.sim_secs >= 0.0);

    // same seed derivation as the benchmark itself
    let mut rng = ONDRng::new(b"s-benchmark");
    let subset = SubsetGenerator::new(3, 4).random(&mut rng).unwrap();
    assert_eq!(report.ops, prepare(3, &subset).unwrap().circuit.len());
}

#[test]
fn benchmark_rejects_oversized_cardinality() {
    assert!(benchmark(2, 5, "s").is_err());
}

#[test]
fn counts_csv_pads_bits() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("counts.csv");
    let path = path.to_str().unwrap();

    let counts: BTreeMap<u64, usize> = [(1, 7), (5, 3)].into_iter().collect();
    write_counts_csv(path, &counts, 4).unwrap();

    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["state,bits,count", "1,0001,7", "5,0101,3"]);
}

#[test]
fn rows_csv_keeps_header_and_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("rows.csv");
    let path = path.to_str().unwrap();

    let rows = vec![
        vec!["2".to_string(), "3".to_string(), String::new()],
        vec!["4".to_string(), "5".to_string(), "0.5".to_string()],
    ];
    write_rows_csv(path, "n,card,fidelity", &rows).unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, "n,card,fidelity\n2,3,\n4,5,0.5\n");
}
