//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n`
//! [Bernoulli trials](https://en.wikipedia.org/wiki/Bernoulli_trial) with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17` (assuming head = 1 and tail = 0).
//! To get the probability of getting 14 heads or less we can compute the cdf at `14`.
//!
//! The parameters can also be estimated from data. After [ingesting](Binomial::ingest)
//! a file of `0`s and `1`s, [Binomial::rederive_from_samples] sets `n` to the
//! number of samples and `p` to their mean.
//!
//! ```
//! use BinomialStatistics::distributions::Binomial::Binomial;
//!
//! let a: Binomial = Binomial::new(0.5, 10).unwrap();
//! let b: Binomial = Binomial::new(0.5, 10).unwrap();
//! let c: Binomial = a.combine(&b).unwrap();
//!
//! assert_eq!(c.get_n(), 20);
//! assert_eq!(c.get_mean(), 10.0);
//! ```

use std::{fmt, ops::Add, path::Path};

use log::debug;
use rand::Rng;

use crate::{
    configuration::{PMF_SERIES_MAX_PREALLOCATION, binomial_defaults, chart_labels},
    distribution::Distribution,
    errors::DistributionError,
    euclid::{self, combinatorics},
    plot::{CategoricalChart, ChartLabels, ChartSink, SeriesChart},
};

/// A Binomial distribution with `n` trials and probability of success `p`.
///
/// `n` and `p` are the only independent state. The mean and standard deviation
/// stored in the inner [Distribution] are always recomputed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    base: Distribution,
    p: f64,
    n: u64,
}

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///      - `p` must belong in the interval `[0.0, 1.0]`. Otherwise an error will be returned.
    ///  - `n` indicates the number of trials
    ///
    /// The mean and standard deviation are computed immediately.
    pub fn new(p: f64, n: u64) -> Result<Binomial, DistributionError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidNumber(p));
        }

        return Ok(Binomial::from_valid(p, n));
    }

    /// Reads the file at `path`, and builds the Binomial that best fits it.
    ///
    /// Equivalent to [ingesting](Binomial::ingest) into a default Binomial
    /// and calling [Binomial::rederive_from_samples].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Binomial, DistributionError> {
        let mut ret: Binomial = Binomial::default();
        ret.ingest(path)?;
        ret.rederive_from_samples()?;
        return Ok(ret);
    }

    /// `p` must already be a valid probability.
    fn from_valid(p: f64, n: u64) -> Binomial {
        let mut ret: Binomial = Binomial {
            base: Distribution::new(0.0, 0.0),
            p,
            n,
        };
        ret.compute_mean();
        ret.compute_stdev();
        return ret;
    }

    /// Return `p` (probability of success).
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Return the stored mean (`n * p`).
    pub const fn get_mean(&self) -> f64 {
        return self.base.get_mean();
    }

    /// Return the stored standard deviation (`sqrt(n * p * (1 - p))`).
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.base.get_standard_deviation();
    }

    /// Gives a reference to the underlying [Distribution].
    pub const fn as_distribution(&self) -> &Distribution {
        return &self.base;
    }

    /// Gives a reference to the ingested samples.
    pub fn peek_samples(&self) -> &[f64] {
        return self.base.peek_samples();
    }

    /// Computes the mean (`n * p`), stores it and returns it.
    pub fn compute_mean(&mut self) -> f64 {
        let mean: f64 = self.n as f64 * self.p;
        self.base.mean = mean;
        return mean;
    }

    /// Computes the standard deviation (`sqrt(n * p * (1 - p))`), stores it and returns it.
    pub fn compute_stdev(&mut self) -> f64 {
        let std_dev: f64 = self.variance().sqrt();
        self.base.standard_deviation = std_dev;
        return std_dev;
    }

    /// The variance: `n * p * (1 - p)`.
    pub fn variance(&self) -> f64 {
        return self.n as f64 * self.p * (1.0 - self.p);
    }

    /// The [probability mass function](https://en.wikipedia.org/wiki/Probability_mass_function):
    /// the probability of getting exacly `k` successes.
    ///
    /// `C(n, k) * p^k * (1 - p)^(n - k)`
    ///
    /// If `k` is not in `[0, n]`, returns [DistributionError::InvalidArgument].
    pub fn probability_mass(&self, k: u64) -> Result<f64, DistributionError> {
        if self.n < k {
            return Err(DistributionError::InvalidArgument { k, n: self.n });
        }

        // `0 * ln(0)` would be a NaN in log space, so the degenerate cases go first.
        if self.p == 0.0 {
            return Ok(if k == 0 { 1.0 } else { 0.0 });
        }
        if self.p == 1.0 {
            return Ok(if k == self.n { 1.0 } else { 0.0 });
        }

        let q: f64 = 1.0 - self.p;

        if let Some(binomial_coef) = combinatorics::binomial_coefficient(self.n, k) {
            let prob: f64 = int_pow(self.p, k) * int_pow(q, self.n - k);
            // A subnormal or zero product has lost precision, use log space instead.
            if prob.is_normal() {
                return Ok((binomial_coef as f64) * prob);
            }
        }

        // The coefficient is too big (or the powers too small), join the
        // computations in log space.
        let ln_coef: f64 = combinatorics::ln_binomial_coefficient(self.n, k)
            .ok_or(DistributionError::InvalidArgument { k, n: self.n })?;
        let ln_mass: f64 = ln_coef + (k as f64) * self.p.ln() + ((self.n - k) as f64) * q.ln();

        return Ok(ln_mass.exp());
    }

    /// The [cumulative distribution function](https://en.wikipedia.org/wiki/Cumulative_distribution_function):
    /// the probability of getting `k` successes or less.
    ///
    /// If `k` is not in `[0, n]`, returns [DistributionError::InvalidArgument].
    pub fn cumulative_probability(&self, k: u64) -> Result<f64, DistributionError> {
        if self.n < k {
            return Err(DistributionError::InvalidArgument { k, n: self.n });
        }

        let mut accumulator: f64 = 0.0;
        for i in 0..=k {
            accumulator += self.probability_mass(i)?;
        }

        return Ok(accumulator.min(1.0));
    }

    /// Returns `(k, pmf(k))` for every `k` in `[0, n]`.
    pub fn pmf_series(&self) -> Result<Vec<(u64, f64)>, DistributionError> {
        let points: usize = usize::try_from(self.n).map_or(usize::MAX, |n: usize| n.saturating_add(1));
        let mut ret: Vec<(u64, f64)> = Vec::with_capacity(points.min(PMF_SERIES_MAX_PREALLOCATION));
        for k in 0..=self.n {
            ret.push((k, self.probability_mass(k)?));
        }
        return Ok(ret);
    }

    /// Reads the samples from the file at `path`. See [Distribution::ingest].
    ///
    /// `n` and `p` are **not** updated. Call [Binomial::rederive_from_samples] for that.
    pub fn ingest<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DistributionError> {
        return self.base.ingest(path);
    }

    /// Reads the samples from any line source. See [Distribution::ingest_reader].
    pub fn ingest_reader<R: std::io::BufRead>(&mut self, reader: R) -> Result<(), DistributionError> {
        return self.base.ingest_reader(reader);
    }

    /// Replaces `n` and `p` with the values that best fit the ingested samples:
    ///  - `n` is the number of samples.
    ///  - `p` is the mean of the samples.
    ///
    /// The mean and standard deviation are then recomputed.
    ///
    /// If there are no samples, returns [DistributionError::InvalidState]
    /// and nothing is modified.
    pub fn rederive_from_samples(&mut self) -> Result<(), DistributionError> {
        let samples: &[f64] = self.base.peek_samples();
        let p: f64 = euclid::mean(samples).ok_or(DistributionError::InvalidState)?;
        let n: u64 = samples.len() as u64;

        debug!("Re-derived parameters from samples: n = {}, p = {}", n, p);

        self.n = n;
        self.p = p;
        self.compute_mean();
        self.compute_stdev();
        return Ok(());
    }

    /// Combines 2 Binomials with the same `p` into a new one with
    /// `n = self.n + other.n`.
    ///
    /// The probabilities are compared exacly (no tolerance). If they differ,
    /// returns [DistributionError::IncompatibleOperands].
    ///
    /// The result has no samples. If the total number of trials does not fit
    /// in a `u64`, returns [DistributionError::NumericalError].
    pub fn combine(&self, other: &Binomial) -> Result<Binomial, DistributionError> {
        #[allow(clippy::float_cmp)]
        if self.p != other.p {
            return Err(DistributionError::IncompatibleOperands {
                left: self.p,
                right: other.p,
            });
        }

        debug!("Combining Binomials with n = {} and n = {}", self.n, other.n);

        let n: u64 = self
            .n
            .checked_add(other.n)
            .ok_or(DistributionError::NumericalError {
                left: self.n,
                right: other.n,
            })?;

        return Ok(Binomial::from_valid(self.p, n));
    }

    /// Draws `count` values from the distribution. Each one is the number
    /// of successes in `n` simulated trials.
    pub fn sample_multiple(&self, count: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();

        let mut ret: Vec<f64> = Vec::with_capacity(count);
        for _ in 0..count {
            let mut successes: u64 = 0;
            for _ in 0..self.n {
                if rng.random::<f64>() < self.p {
                    successes += 1;
                }
            }
            ret.push(successes as f64);
        }

        return ret;
    }

    /// Simulates `count` single Bernoulli trials with probability `p`.
    ///
    /// The result (`0.0` or `1.0` per trial) has the same format as the
    /// ingested data, so it can be written to a data file.
    pub fn bernoulli_trials(&self, count: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();

        return (0..count)
            .map(|_| if rng.random::<f64>() < self.p { 1.0 } else { 0.0 })
            .collect();
    }

    /// The expected count of each outcome: `"0"` with height `(1 - p) * n`
    /// and `"1"` with height `p * n`.
    pub fn histogram_chart(&self) -> CategoricalChart {
        let n: f64 = self.n as f64;
        return CategoricalChart {
            labels: ChartLabels::new(
                chart_labels::HISTOGRAM_TITLE,
                chart_labels::HISTOGRAM_X_LABEL,
                chart_labels::HISTOGRAM_Y_LABEL,
            ),
            bars: vec![
                ("0".to_string(), (1.0 - self.p) * n),
                ("1".to_string(), self.p * n),
            ],
        };
    }

    /// The pmf for every outcome in `[0, n]`.
    pub fn pmf_chart(&self) -> Result<SeriesChart, DistributionError> {
        return Ok(SeriesChart {
            labels: ChartLabels::new(
                chart_labels::PMF_TITLE,
                chart_labels::PMF_X_LABEL,
                chart_labels::PMF_Y_LABEL,
            ),
            points: self.pmf_series()?,
        });
    }

    /// Sends the [histogram chart](Binomial::histogram_chart) to `sink`.
    pub fn render_histogram(&self, sink: &mut dyn ChartSink) -> Result<(), DistributionError> {
        return sink.plot_categorical_bars(&self.histogram_chart());
    }

    /// Sends the [pmf chart](Binomial::pmf_chart) to `sink`.
    pub fn render_pmf_plot(&self, sink: &mut dyn ChartSink) -> Result<(), DistributionError> {
        let chart: SeriesChart = self.pmf_chart()?;
        return sink.plot_series_bars(&chart);
    }
}

#[bon::bon]
impl Binomial {
    /// Builds a [Binomial] where every omitted parameter takes its default from
    /// [binomial_defaults] (`p = 0.5`, `n = 20`).
    ///
    /// ```
    /// use BinomialStatistics::distributions::Binomial::Binomial;
    ///
    /// let b: Binomial = Binomial::parameters().p(0.25).call().unwrap();
    /// assert_eq!(b.get_n(), 20);
    /// assert_eq!(b.get_mean(), 5.0);
    /// ```
    #[builder]
    pub fn parameters(
        #[builder(default = binomial_defaults::DEFAULT_PROBABILITY)] p: f64,
        #[builder(default = binomial_defaults::DEFAULT_TRIALS)] n: u64,
    ) -> Result<Binomial, DistributionError> {
        return Binomial::new(p, n);
    }
}

impl Default for Binomial {
    fn default() -> Self {
        return Binomial::from_valid(
            binomial_defaults::DEFAULT_PROBABILITY,
            binomial_defaults::DEFAULT_TRIALS,
        );
    }
}

impl fmt::Display for Binomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "mean: {:?}, standard deviation: {:?}, probability: {:?}, n: {}",
            self.get_mean(),
            self.get_standard_deviation(),
            self.p,
            self.n
        );
    }
}

impl Add for &Binomial {
    type Output = Result<Binomial, DistributionError>;

    /// Same as [Binomial::combine].
    fn add(self, rhs: &Binomial) -> Self::Output {
        return self.combine(rhs);
    }
}

/// `base^exp`, using the faster `powi` when `exp` fits in an `i32`.
fn int_pow(base: f64, exp: u64) -> f64 {
    return match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(exp as f64),
    };
}
