use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;

use BinomialStatistics::distributions::Binomial::Binomial;

proptest! {
    /// mean == n*p and stdev == sqrt(n*p*(1-p)) for every valid parameter.
    #[test]
    fn mean_and_stdev_follow_the_parameters(p in 0.0..=1.0_f64, n in 0..10_000_u64) {
        let mut b: Binomial = Binomial::new(p, n).unwrap();
        let n_f: f64 = n as f64;

        prop_assert_eq!(b.compute_mean(), n_f * p);
        prop_assert_eq!(b.compute_stdev(), (n_f * p * (1.0 - p)).sqrt());
        prop_assert_eq!(b.get_mean(), n_f * p);
        prop_assert_eq!(b.get_standard_deviation(), (n_f * p * (1.0 - p)).sqrt());
    }

    /// The pmf adds up to 1 over [0, n].
    #[test]
    fn pmf_sums_to_one(p in 0.0..=1.0_f64, n in 0..300_u64) {
        let b: Binomial = Binomial::new(p, n).unwrap();
        let total: f64 = b.pmf_series().unwrap().iter().map(|(_, y)| y).sum();
        prop_assert!((total - 1.0).abs() < 1.0e-9, "total = {}", total);
    }

    /// Combining keeps p and adds the trials.
    #[test]
    fn combine_adds_trials(p in 0.0..=1.0_f64, n1 in 0..1_000_u64, n2 in 0..1_000_u64) {
        let a: Binomial = Binomial::new(p, n1).unwrap();
        let b: Binomial = Binomial::new(p, n2).unwrap();
        let c: Binomial = a.combine(&b).unwrap();

        prop_assert_eq!(c.get_n(), n1 + n2);
        prop_assert_eq!(c.get_p(), p);
        prop_assert_eq!(c, Binomial::new(p, n1 + n2).unwrap());
    }
}

#[test]
fn known_pmf_values() {
    // Compared against a precomputed table
    let b: Binomial = Binomial::new(0.3, 10).unwrap();
    let expected: [f64; 11] = [
        0.0282475249,
        0.1210608210,
        0.2334744405,
        0.2668279320,
        0.2001209490,
        0.1029193452,
        0.0367569090,
        0.0090016920,
        0.0014467005,
        0.0001377810,
        0.0000059049,
    ];

    for (k, e) in expected.iter().enumerate() {
        assert_approx_eq!(b.probability_mass(k as u64).unwrap(), *e, 1.0e-9);
    }
    assert_approx_eq!(b.cumulative_probability(10).unwrap(), 1.0);
}
