//! # Distribution
//!
//! The generic base of every distribution in the library: a mean, a standard
//! deviation and the samples ingested from a data source.
//!
//! The data source is a plain text file with one number per line. Every number
//! must be a [Bernoulli](https://en.wikipedia.org/wiki/Bernoulli_distribution)
//! outcome: `0` or `1`.
//!
//! ```text
//! 0
//! 1
//! 1
//! 0
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use crate::{configuration::SAMPLE_DISPLAY_PRECISION, errors::DistributionError, euclid};

/// A generic distribution: summary statistics plus ingested samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub(crate) mean: f64,
    pub(crate) standard_deviation: f64,
    samples: Vec<f64>,
}

impl Distribution {
    /// Creates a new [Distribution] with the given statistics and no samples.
    ///
    /// The values are not checked.
    pub const fn new(mean: f64, standard_deviation: f64) -> Distribution {
        return Distribution {
            mean,
            standard_deviation,
            samples: Vec::new(),
        };
    }

    /// Return the mean.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Return the standard deviation.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// Gives a reference to the ingested samples. Empty if nothing
    /// has been ingested yet.
    pub fn peek_samples(&self) -> &[f64] {
        return &self.samples;
    }

    /// The ingested samples as text, using [SAMPLE_DISPLAY_PRECISION] decimals
    /// (`"0.0"` and `"1.0"`).
    pub fn formatted_samples(&self) -> Vec<String> {
        return self
            .samples
            .iter()
            .map(|s: &f64| format!("{:.*}", SAMPLE_DISPLAY_PRECISION, s))
            .collect();
    }

    /// Reads the samples from the file at `path`. See [Distribution::ingest_reader].
    ///
    /// If the file can not be opened or read, returns [DistributionError::IOErr].
    pub fn ingest<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DistributionError> {
        let path: &Path = path.as_ref();
        debug!("Ingesting samples from {}", path.display());

        let file: File = File::open(path)?;
        return self.ingest_reader(BufReader::new(file));
    }

    /// Reads one number per line from `reader` and replaces the samples with them.
    ///
    /// Lines are trimmed and every value must be `0` or `1`. Blank lines are only
    /// allowed at the end of the stream. A blank line followed by more data is
    /// a [DistributionError::ParseErr].
    ///
    /// The operation is atomic: if any line fails to parse
    /// ([DistributionError::ParseErr]), holds a value other than `0` or `1`
    /// ([DistributionError::ValidationErr]) or can not be read
    /// ([DistributionError::IOErr]), the previous samples are left untouched.
    ///
    /// The mean and standard deviation are **not** updated.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<(), DistributionError> {
        let mut parsed: Vec<f64> = Vec::new();
        // first blank line (1-indexed) and its raw content, not yet followed by data
        let mut pending_blank: Option<(usize, String)> = None;

        for (i, line) in reader.lines().enumerate() {
            let line: String = line?;
            // lines are reported 1-indexed
            let line_number: usize = i + 1;

            let content: &str = line.trim();
            if content.is_empty() {
                if pending_blank.is_none() {
                    pending_blank = Some((line_number, line.clone()));
                }
                continue;
            }

            if let Some((blank_line, blank_content)) = pending_blank.take() {
                warn!("Rejected line {}: blank line before more data", blank_line);
                return Err(DistributionError::ParseErr {
                    line: blank_line,
                    content: blank_content,
                });
            }

            let value: f64 = match content.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    warn!("Rejected line {}: {:?} is not a number", line_number, content);
                    return Err(DistributionError::ParseErr {
                        line: line_number,
                        content: content.to_string(),
                    });
                }
            };

            if !euclid::has_only_zeros_and_ones(&[value]) {
                warn!("Rejected line {}: {} is not 0 or 1", line_number, value);
                return Err(DistributionError::ValidationErr {
                    line: line_number,
                    value,
                });
            }

            parsed.push(value);
        }

        debug!("Ingested {} samples", parsed.len());
        self.samples = parsed;
        return Ok(());
    }
}
