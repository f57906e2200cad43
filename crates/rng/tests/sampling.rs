use rng::ONDRng;

#[test]
fn same_seed_same_stream() {
    let mut a = ONDRng::new(b"seed");
    let mut b = ONDRng::new(b"seed");

    for _ in 0..32 {
        assert_eq!(a.next_u64(b"CTX"), b.next_u64(b"CTX"));
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = ONDRng::new(b"below");
    for bound in 1..64u64 {
        for _ in 0..16 {
            assert!(rng.next_below(bound, b"T") < bound);
        }
    }
}

#[test]
fn next_f64_unit_interval() {
    let mut rng = ONDRng::new(b"unit");
    for _ in 0..256 {
        let x = rng.next_f64(b"U");
        assert!((0.0..=1.0).contains(&x), "x = {}", x);
    }
}

#[test]
fn sample_distinct_is_sorted_and_unique() {
    let mut rng = ONDRng::new(b"distinct");

    for &(count, bound) in &[(0usize, 4u64), (1, 1), (5, 8), (8, 8), (10, 1 << 20)] {
        let s = rng.sample_distinct(count, bound);
        assert_eq!(s.len(), count);
        assert!(s.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {:?}", s);
        assert!(s.iter().all(|&x| x < bound));
    }
}

#[test]
fn full_draw_covers_range() {
    let mut rng = ONDRng::new(b"full");
    let s = rng.sample_distinct(16, 16);
    assert_eq!(s, (0..16).collect::<Vec<u64>>());
}
