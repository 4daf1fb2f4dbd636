use crate::catalog::CategoryTable;
use crate::stats::{add_into, StatVector};

/// Every ENGINE x EXHAUST x SUSPENSION x GEARBOX combination with its summed
/// stats. Row order is engine-major, gearbox-minor.
pub struct CrossProduct {
    dims: [usize; 4],
    base: Vec<StatVector>,
}

impl CrossProduct {
    pub fn build(tables: [&CategoryTable; 4]) -> Self {
        let dims = [
            tables[0].len(),
            tables[1].len(),
            tables[2].len(),
            tables[3].len(),
        ];
        let total = dims.iter().product();
        let mut base = Vec::with_capacity(total);

        for e in tables[0].rows() {
            for x in tables[1].rows() {
                for s in tables[2].rows() {
                    for g in tables[3].rows() {
                        let mut row = *e;
                        add_into(&mut row, x);
                        add_into(&mut row, s);
                        add_into(&mut row, g);
                        base.push(row);
                    }
                }
            }
        }

        Self { dims, base }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn dims(&self) -> [usize; 4] {
        self.dims
    }

    pub fn rows(&self) -> &[StatVector] {
        &self.base
    }

    /// Row index back to per-category indices.
    pub fn decode(&self, mut i: usize) -> [usize; 4] {
        let mut out = [0; 4];
        for slot in (0..4).rev() {
            out[slot] = i % self.dims[slot];
            i /= self.dims[slot];
        }
        out
    }
}

/// Unordered pairs of distinct indices `(i, j)` with `i < j`, row-major.
pub fn trinket_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
