use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE256-driven generator. Every draw takes a context tag so
/// independent consumers of one stream stay domain-separated.
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    fn advance(&mut self, ctx: &[u8], out: &mut [u8]) {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"SCSS"], &mut next_state);
        self.state = next_state;

        shake(&[&self.state, ctx], out);

        if self.state[0] < 16 {
            let state = self.state;
            let mut next_state = self.state;
            shake(&[&state, b"SKIP"], &mut next_state);
            self.state = next_state;
        }
    }

    pub fn next_u64(&mut self, ctx: &[u8]) -> u64 {
        let mut out = [0u8; 8];
        self.advance(ctx, &mut out);
        u64::from_be_bytes(out)
    }

    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        (self.next_u64(ctx) as f64) / (u64::MAX as f64)
    }

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u64, ctx: &[u8]) -> u64 {
        debug_assert!(bound > 0, "next_below requires a non-zero bound");
        ((self.next_u64(ctx) as u128 * bound as u128) >> 64) as u64
    }

    /// `count` distinct values from `[0, bound)`, ascending (Floyd's algorithm).
    pub fn sample_distinct(&mut self, count: usize, bound: u64) -> Vec<u64> {
        let count = count as u64;
        debug_assert!(count <= bound, "cannot draw {} distinct values below {}", count, bound);

        let mut picked = std::collections::BTreeSet::new();
        for j in bound.saturating_sub(count)..bound {
            let t = self.next_below(j + 1, b"SAMPLE_DISTINCT");
            if !picked.insert(t) {
                picked.insert(j);
            }
        }
        picked.into_iter().collect()
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
