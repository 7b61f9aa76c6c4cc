
//! This file contains the deafult values and other value choices used trough the library.
//!
//! The values are plain `static`s. If you need something different, pass the
//! values explicitly to the functions that take them (for example, the
//! [Binomial builder](crate::distributions::Binomial::Binomial::parameters)).

/// Default values for a [Binomial](crate::distributions::Binomial::Binomial)
/// built without explicit parameters.
pub mod binomial_defaults {
    /// The deafult probability of success of each trial is `0.5` (a fair coin).
    pub static DEFAULT_PROBABILITY: f64 = 0.5;

    /// The deafult number of trials is `20`.
    pub static DEFAULT_TRIALS: u64 = 20;
}

/// Number of decimals used when showing ingested samples as text.
///
/// With `1`, the samples are shown as `"0.0"` and `"1.0"`.
pub static SAMPLE_DISPLAY_PRECISION: usize = 1;

/// Titles and labels used when rendering charts.
pub mod chart_labels {
    /// Title of the outcome count histogram.
    pub static HISTOGRAM_TITLE: &str = "Bar Chart of Data";
    pub static HISTOGRAM_X_LABEL: &str = "outcome";
    pub static HISTOGRAM_Y_LABEL: &str = "count";

    /// Title of the pmf plot.
    pub static PMF_TITLE: &str = "Distribution of Outcomes";
    pub static PMF_X_LABEL: &str = "Outcome";
    pub static PMF_Y_LABEL: &str = "Probability";
}

/// The width (in characters) of the longest bar drawn by
/// [TextChart](crate::plot::TextChart). Every other bar is scaled relative to it.
pub static TEXT_CHART_WIDTH: usize = 50;

/// The maximum number of points reserved up front by
/// [pmf_series](crate::distributions::Binomial::Binomial::pmf_series).
/// Bigger series still work, they just grow as they are filled.
pub static PMF_SERIES_MAX_PREALLOCATION: usize = 1 << 16;
