//! Euclid contains uscefull math functions

/// Returns true if every value is exactly `0.0` or `1.0`.
///
/// An empty slice is trivially valid.
pub fn has_only_zeros_and_ones(data: &[f64]) -> bool {
    return data.iter().all(|&x| x == 0.0 || x == 1.0);
}

/// The arithmetic mean of `data`, or [None] if it is empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }

    let mut sum: f64 = 0.0;
    for &x in data {
        sum += x;
    }

    return Some(sum / data.len() as f64);
}

pub mod combinatorics {

    /// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
    /// `C(n, k) = n! / (k! * (n - k)!)` exactly.
    ///
    /// Returns [None] if `n < k` or if the result (or an intermediate value)
    /// does not fit in a `u128`. In that case, use [ln_binomial_coefficient].
    pub fn binomial_coefficient(n: u64, k: u64) -> Option<u128> {
        if n < k {
            return None;
        }

        // C(n, k) = C(n, n - k), use the shortest product
        let k: u64 = k.min(n - k);
        let n_big: u128 = n as u128;

        let mut acc: u128 = 1;
        for i in 1..=(k as u128) {
            // acc * (n - k + i) is always divisible by i because
            // acc * (n - k + i) / i = C(n - k + i, i)
            acc = acc.checked_mul(n_big - k as u128 + i)? / i;
        }

        return Some(acc);
    }

    /// Computes `ln(C(n, k))`.
    ///
    /// Slower and less precise than [binomial_coefficient] but it never overflows.
    /// Returns [None] if `n < k`.
    pub fn ln_binomial_coefficient(n: u64, k: u64) -> Option<f64> {
        if n < k {
            return None;
        }

        let k: u64 = k.min(n - k);
        let base: f64 = (n - k) as f64;

        let mut acc: f64 = 0.0;
        for i in 1..=k {
            let i: f64 = i as f64;
            acc += ((base + i) / i).ln();
        }

        return Some(acc);
    }
}
