use crate::truncation::Truncation;
use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

#[derive(Clone)]
pub struct Tensor3 {
    pub data: Vec<C64>,
    pub dl: usize,
    pub dp: usize,
    pub dr: usize,
}

impl Tensor3 {
    pub fn zeros(dl: usize, dp: usize, dr: usize) -> Self {
        Self {
            data: vec![C64::new(0.0, 0.0); dl * dp * dr],
            dl,
            dp,
            dr,
        }
    }

    #[inline]
    fn idx(&self, l: usize, p: usize, r: usize) -> usize {
        (l * self.dp + p) * self.dr + r
    }

    pub fn get(&self, l: usize, p: usize, r: usize) -> C64 {
        self.data[self.idx(l, p, r)]
    }

    pub fn set(&mut self, l: usize, p: usize, r: usize, v: C64) {
        let i = self.idx(l, p, r);
        self.data[i] = v;
    }
}

/// Open-boundary MPS over qubits. Site `k` carries bit `k` of the basis index.
#[derive(Clone)]
pub struct MPS {
    pub sites: Vec<Tensor3>,
    /// Normalised Schmidt weights (squared singular values) for each bond
    /// `k | k+1`.
    spectra: Vec<Vec<f64>>,
}

impl MPS {
    pub fn new_zero(n: usize) -> Self {
        let mut sites = Vec::with_capacity(n);
        for _ in 0..n {
            let mut t = Tensor3::zeros(1, 2, 1);
            t.set(0, 0, 0, C64::new(1.0, 0.0));
            sites.push(t);
        }
        let spectra = vec![vec![1.0]; n.saturating_sub(1)];
        Self { sites, spectra }
    }

    /// Decomposes a dense little-endian state vector by successive thin SVDs.
    ///
    /// Returns `None` unless the length is a power of two with at least one
    /// qubit.
    pub fn from_amplitudes(amps: &[C64], trunc: Truncation) -> Option<Self> {
        let len = amps.len();
        if len < 2 || !len.is_power_of_two() {
            return None;
        }
        let n = len.trailing_zeros() as usize;

        let mut sites = Vec::with_capacity(n);
        let mut spectra = Vec::with_capacity(n - 1);
        let mut cur = amps.to_vec();
        let mut dl = 1usize;
        let mut rest = len;

        for _ in 0..n - 1 {
            let cols = rest / 2;
            let mut theta = Mat::<C64>::zeros(dl * 2, cols);
            for l in 0..dl {
                for y in 0..rest {
                    theta.write(l * 2 + (y & 1), y >> 1, cur[l * rest + y]);
                }
            }

            let svd = theta.thin_svd();
            let s = svd.s_diagonal();

            let mut kept = 0;
            for i in 0..s.nrows() {
                let sv = s.read(i).re;
                if sv > trunc.cutoff && kept < trunc.max_bond {
                    kept += 1;
                }
            }
            if kept == 0 {
                kept = 1;
            }

            let u_full = svd.u();
            let v_full = svd.v();
            let u_mat = u_full.submatrix(0, 0, u_full.nrows(), kept);
            let v_mat = v_full.submatrix(0, 0, v_full.nrows(), kept);
            let mut s_vals = Vec::with_capacity(kept);
            for i in 0..kept {
                s_vals.push(s.read(i).re);
            }

            let mut a = Tensor3::zeros(dl, 2, kept);
            for l in 0..dl {
                for p in 0..2 {
                    for m in 0..kept {
                        a.set(l, p, m, u_mat.read(l * 2 + p, m));
                    }
                }
            }
            sites.push(a);

            let weight: f64 = s_vals.iter().map(|s| s * s).sum();
            spectra.push(if weight > 0.0 {
                s_vals.iter().map(|s| s * s / weight).collect()
            } else {
                vec![1.0]
            });

            let mut next = vec![C64::new(0.0, 0.0); kept * cols];
            for m in 0..kept {
                for y in 0..cols {
                    next[m * cols + y] = v_mat.read(y, m).conj() * s_vals[m];
                }
            }
            cur = next;
            dl = kept;
            rest = cols;
        }

        let mut last = Tensor3::zeros(dl, 2, 1);
        for l in 0..dl {
            for p in 0..2 {
                last.set(l, p, 0, cur[l * 2 + p]);
            }
        }
        sites.push(last);

        Some(Self { sites, spectra })
    }

    /// Contracts back to a dense little-endian state vector.
    pub fn to_amplitudes(&self) -> Vec<C64> {
        let n = self.sites.len();
        let mut out = Vec::with_capacity(1 << n);
        for x in 0..(1usize << n) {
            let mut v = vec![C64::new(1.0, 0.0)];
            for (k, a) in self.sites.iter().enumerate() {
                let p = (x >> k) & 1;
                let mut next = vec![C64::new(0.0, 0.0); a.dr];
                for (l, &lv) in v.iter().enumerate() {
                    for (r, slot) in next.iter_mut().enumerate() {
                        *slot += lv * a.get(l, p, r);
                    }
                }
                v = next;
            }
            out.push(v[0]);
        }
        out
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn bond_dims(&self) -> Vec<usize> {
        self.sites
            .iter()
            .take(self.sites.len().saturating_sub(1))
            .map(|s| s.dr)
            .collect()
    }

    pub fn chi_max(&self) -> usize {
        self.bond_dims().into_iter().max().unwrap_or(1)
    }

    /// Von Neumann entropy, in bits, across bond `k | k+1`.
    pub fn entropy(&self, bond: usize) -> f64 {
        let Some(weights) = self.spectra.get(bond) else {
            return 0.0;
        };
        weights
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.log2())
            .sum()
    }
}
