//! The basis permutation taking the Grover-Rudolph register `{0, .., m-1}`
//! onto the target subset, split into disjoint cycles.

use crate::subset::Subset;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug)]
pub struct SubsetPermutation {
    targets: Vec<u64>,
}

impl SubsetPermutation {
    pub fn new(subset: &Subset) -> Self {
        Self {
            targets: subset.elements().to_vec(),
        }
    }

    fn domain_len(&self) -> u64 {
        self.targets.len() as u64
    }

    fn in_domain(&self, x: u64) -> bool {
        x < self.domain_len()
    }

    fn image(&self, x: u64) -> u64 {
        self.targets[x as usize]
    }

    /// `(i, c_i)` for every Grover-Rudolph index `i`.
    pub fn mapping(&self) -> Vec<(u64, u64)> {
        self.targets
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as u64, c))
            .collect()
    }

    /// Disjoint cycles whose product sends `i` to `c_i` for every `i < m`.
    /// Fixed points are left out. A cycle `[x0, x1, .., xk]` maps each
    /// element to the next and `xk` back to `x0`.
    pub fn cycles(&self) -> Vec<Vec<u64>> {
        let m = self.targets.len();
        let mut is_target = vec![false; m];
        for &c in &self.targets {
            if self.in_domain(c) {
                is_target[c as usize] = true;
            }
        }

        let mut visited = vec![false; m];
        let mut cycles = Vec::new();

        // Chains start at domain values nothing maps onto and leave the
        // domain after finitely many steps; closing them back to the start
        // is free because the start has no other preimage.
        for start in 0..m {
            if is_target[start] {
                continue;
            }
            let mut chain = vec![start as u64];
            let mut cur = start as u64;
            while self.in_domain(cur) {
                visited[cur as usize] = true;
                cur = self.image(cur);
                chain.push(cur);
            }
            cycles.push(chain);
        }

        for start in 0..m {
            if visited[start] || self.image(start as u64) == start as u64 {
                continue;
            }
            let mut cycle = Vec::new();
            let mut cur = start as u64;
            while !visited[cur as usize] {
                visited[cur as usize] = true;
                cycle.push(cur);
                cur = self.image(cur);
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// The full permutation realised by [`cycles`](Self::cycles), on any
    /// basis value.
    pub fn apply(&self, x: u64) -> u64 {
        if self.in_domain(x) {
            return self.image(x);
        }
        // x ends a chain iff it is a target; walk back to the chain start.
        let inverse: HashMap<u64, u64> = self
            .mapping()
            .into_iter()
            .map(|(i, c)| (c, i))
            .collect();
        let mut cur = x;
        while let Some(&prev) = inverse.get(&cur) {
            cur = prev;
        }
        cur
    }
}

impl fmt::Display for SubsetPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .mapping()
            .into_iter()
            .map(|(i, c)| format!("{} -> {}", i, c))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
