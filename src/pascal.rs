use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Row-memoized Pascal's triangle.
///
/// Each row is built from the previous one via C(n,k) = C(n-1,k-1) + C(n-1,k),
/// so repeated queries over the same small range of n cost one table walk
/// instead of one multiplicative pass per call.
#[derive(Debug, Default)]
pub struct Pascal {
    rows: Vec<Vec<BigUint>>,
}

impl Pascal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&mut self, n: usize) -> &[BigUint] {
        while self.rows.len() <= n {
            let next = match self.rows.last() {
                None => vec![BigUint::one()],
                Some(prev) => {
                    let mut row = Vec::with_capacity(prev.len() + 1);
                    row.push(BigUint::one());
                    for pair in prev.windows(2) {
                        row.push(&pair[0] + &pair[1]);
                    }
                    row.push(BigUint::one());
                    row
                }
            };
            self.rows.push(next);
        }
        &self.rows[n]
    }

    pub fn value(&mut self, n: usize, k: usize) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        self.row(n)[k].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comb::comb;

    #[test]
    fn test_first_rows() {
        let mut pascal = Pascal::new();
        let ints = |row: &[BigUint]| -> Vec<u64> {
            row.iter().map(|v| u64::try_from(v).unwrap()).collect()
        };

        assert_eq!(ints(pascal.row(0)), vec![1]);
        assert_eq!(ints(pascal.row(1)), vec![1, 1]);
        assert_eq!(ints(pascal.row(4)), vec![1, 4, 6, 4, 1]);
        assert_eq!(ints(pascal.row(7)), vec![1, 7, 21, 35, 35, 21, 7, 1]);
    }

    #[test]
    fn test_out_of_range_k_is_zero() {
        let mut pascal = Pascal::new();
        assert_eq!(pascal.value(3, 4), BigUint::zero());
        assert_eq!(pascal.value(0, 1), BigUint::zero());
    }

    #[test]
    fn test_matches_multiplicative_method() {
        let mut pascal = Pascal::new();
        for n in 0..=30i64 {
            for k in 0..=n {
                assert_eq!(pascal.value(n as usize, k as usize), comb(n, k).unwrap());
            }
        }
    }
}
