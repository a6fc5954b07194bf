//! Errors raised while configuring or running a sweep

/// Boxed error returned by a fallible sort function
pub type SortFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the benchmark runner
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The sort function failed during a timed trial; the sweep is aborted
    #[error("trial {trial} of {trial_count} failed{}: {source}", size_suffix(.input_size))]
    Measurement {
        /// Zero-based trial index
        trial: usize,
        /// Configured trials per measurement
        trial_count: usize,
        /// Input size, when the failure happened inside a sweep
        input_size: Option<usize>,
        /// Underlying failure
        #[source]
        source: SortFailure,
    },
    /// A measurement needs at least one trial
    #[error("trial count must be at least 1")]
    NoTrials,
    /// A sweep needs at least one input size
    #[error("no input sizes configured")]
    NoSizes,
    /// Trial count does not fit the duration arithmetic
    #[error("trial count {0} is too large")]
    TooManyTrials(usize),
}

fn size_suffix(input_size: &Option<usize>) -> String {
    match input_size {
        Some(size) => format!(" for input size {}", size),
        None => String::new(),
    }
}

impl BenchError {
    /// Attach the sweep's input size to a measurement failure
    pub(crate) fn at_size(self, size: usize) -> Self {
        match self {
            BenchError::Measurement {
                trial,
                trial_count,
                source,
                ..
            } => BenchError::Measurement {
                trial,
                trial_count,
                input_size: Some(size),
                source,
            },
            other => other,
        }
    }
}
