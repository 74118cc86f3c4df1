/// Iterator over the C(n, k) index combinations of `0..n`, lexicographic order.
///
/// ```text
/// C(4, 2): [0,1] [0,2] [0,3] [1,2] [1,3] [2,3]
/// ```
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }

    /// Exact number of combinations, saturating on overflow.
    pub fn total(n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k) as u64;
        let n = n as u64;
        (0..k).fold(1u64, |acc, i| acc.saturating_mul(n - i) / (i + 1))
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        // Rightmost index that can still move up
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}
