#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `BinomialStatistics` should have a snake case name convert the identifier to snake case: `binomial_statistics`"
// The rest of the names will follow the snake_case convention.

//! # Binomial Statistics
//!
//!
//! A small statistics library that provides:
//!
//! - [x] A generic [Distribution](distribution::Distribution) with a mean, a standard
//!     deviation and samples ingested from a file
//! - [x] The [Binomial distribution](distributions::Binomial::Binomial)
//!     ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//! - [x] Parameter estimation from data (`n` and `p` from a file of `0`s and `1`s)
//! - [x] Simple charts trough any [ChartSink](plot::ChartSink)
//!
//! ## Distributions
//!
//! [Distribution](distribution::Distribution) holds the statistics common to every
//! distribution and knows how to read data. The [Binomial](distributions::Binomial::Binomial)
//! contains a [Distribution](distribution::Distribution) and keeps its mean and
//! standard deviation in sync with its parameters `n` and `p`.
//!
//! ```
//! use BinomialStatistics::distributions::Binomial::Binomial;
//!
//! let b: Binomial = Binomial::new(0.5, 5).unwrap();
//! assert_eq!(b.get_mean(), 2.5);
//! assert!((b.probability_mass(2).unwrap() - 0.3125).abs() < 1.0e-12);
//! ```
//!
//! ## Data files
//!
//! Data files contain one number per line, each of them `0` or `1`. See
//! [Distribution::ingest](distribution::Distribution::ingest).
//!
//! ## Errors
//!
//! Every fallible operation returns a [DistributionError](errors::DistributionError).
//!
//! ## Logging
//!
//! The library logs trough the [log] facade. Install any logger in your
//! application to see the messages.
//!
//! ***
//!

pub mod configuration;
pub mod distribution;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod plot;
