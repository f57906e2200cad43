/// Bond truncation policy applied after each SVD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Truncation {
    pub max_bond: usize,
    /// singular values at or below this are dropped
    pub cutoff: f64,
}

impl Truncation {
    /// Keeps every numerically non-zero singular value.
    pub fn exact() -> Self {
        Self {
            max_bond: usize::MAX,
            cutoff: 1e-12,
        }
    }
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_bond: 64,
            cutoff: 1e-10,
        }
    }
}
