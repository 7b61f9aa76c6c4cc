use thiserror::Error;

/// Everything that can go wrong when working with a [Distribution](crate::distribution::Distribution)
/// or a [Binomial](crate::distributions::Binomial::Binomial).
#[derive(Error, Debug)]
pub enum DistributionError {
    /// The ingested data contained a value that was not `0` or `1`.
    #[error("Line {line} contains {value}, but only 0 and 1 are allowed. ")]
    ValidationErr { line: usize, value: f64 },
    /// A line of the data source could not be parsed as a number.
    #[error("Line {line} could not be parsed as a number: {content:?}. ")]
    ParseErr { line: usize, content: String },
    /// The data source is missing or could not be read (or a chart could not be written).
    #[error("The data source could not be read: {0}")]
    IOErr(#[from] std::io::Error),
    /// There are no ingested samples to re-derive the parameters from.
    #[error("There are no samples to re-derive the parameters from. Ingest some data first. ")]
    InvalidState,
    /// Two Binomials with different `p` can not be combined.
    #[error("Can not combine Binomials with different probabilities ({left} != {right}). ")]
    IncompatibleOperands { left: f64, right: f64 },
    /// The probability mass was queried outside `[0, n]`.
    #[error("The outcome {k} is outside of the domain [0, {n}]. ")]
    InvalidArgument { k: u64, n: u64 },
    /// The number did not fullfill the conditions of the function.
    /// A probability must be finite and belong to `[0.0, 1.0]`.
    #[error("The probability must be a finite number in [0.0, 1.0]. Found {0}. ")]
    InvalidNumber(f64),
    /// There was an error when performing some numerical computation. Overflow/underflow/division by 0
    #[error("The number of trials overflows ({left} + {right}). ")]
    NumericalError { left: u64, right: u64 },
}
