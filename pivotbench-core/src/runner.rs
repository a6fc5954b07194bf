//! Benchmark Runner
//!
//! Drives timed trials of a sort function and aggregates them:
//! - Each trial sorts a fresh copy of the input; only the sort call is timed
//! - The mean of the trial durations is the reported figure
//! - A sweep generates one input per size and measures both pivot strategies
//!   on copies of that same input
//!
//! Execution is single-threaded. A trial that fails aborts the measurement
//! and, inside a sweep, the whole sweep.

use crate::config::BenchmarkConfig;
use crate::error::{BenchError, SortFailure};
use crate::measure::{Clock, MonotonicClock, Timer};
use crate::sort::{PivotStrategy, sort_owned};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::time::Duration;

/// Timed trials of one sort function on one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Per-trial durations, in trial order
    pub trials: Vec<Duration>,
    /// Arithmetic mean of `trials`
    pub mean: Duration,
}

/// Outcome of one sweep step: both strategies measured on the same input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Length of the generated input
    pub input_size: usize,
    /// Mean trial duration of the randomized strategy
    pub mean_randomized: Duration,
    /// Mean trial duration of the deterministic strategy
    pub mean_deterministic: Duration,
    /// Per-trial durations of the randomized strategy
    pub randomized_trials: Vec<Duration>,
    /// Per-trial durations of the deterministic strategy
    pub deterministic_trials: Vec<Duration>,
}

impl AggregateResult {
    /// Mean duration for one strategy
    pub fn mean(&self, strategy: PivotStrategy) -> Duration {
        match strategy {
            PivotStrategy::Randomized => self.mean_randomized,
            PivotStrategy::Deterministic => self.mean_deterministic,
        }
    }

    /// Raw trial durations for one strategy
    pub fn trials(&self, strategy: PivotStrategy) -> &[Duration] {
        match strategy {
            PivotStrategy::Randomized => &self.randomized_trials,
            PivotStrategy::Deterministic => &self.deterministic_trials,
        }
    }
}

/// Generate `size` values drawn uniformly from `0..=max_value`.
pub fn generate_input(size: usize, max_value: u64) -> Vec<u64> {
    generate_input_with(&mut rand::thread_rng(), size, max_value)
}

/// Generate `size` values drawn uniformly from `0..=max_value` using `rng`.
pub fn generate_input_with<R: Rng>(rng: &mut R, size: usize, max_value: u64) -> Vec<u64> {
    (0..size).map(|_| rng.gen_range(0..=max_value)).collect()
}

/// Arithmetic mean of a set of durations (`None` when empty)
pub fn mean_duration(durations: &[Duration]) -> Option<Duration> {
    let count = u32::try_from(durations.len()).ok().filter(|&n| n > 0)?;
    Some(durations.iter().sum::<Duration>() / count)
}

/// Runs timed trials and sweeps against a clock
pub struct BenchmarkRunner<C: Clock = MonotonicClock> {
    config: BenchmarkConfig,
    clock: C,
}

impl BenchmarkRunner {
    /// Create a runner timing trials on the monotonic system clock
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// Create a runner timing trials on `clock`
    pub fn with_clock(config: BenchmarkConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration this runner was built with
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Clock used for trial timing
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time `trial_count` runs of `sort_fn`, each on a fresh copy of `sequence`.
    ///
    /// The copy is made before the timer starts. The first failing trial
    /// stops the measurement and its error is returned.
    pub fn measure_trials<T, F, R, E>(
        &self,
        mut sort_fn: F,
        sequence: &[T],
        trial_count: usize,
    ) -> Result<Measurement, BenchError>
    where
        T: Clone,
        F: FnMut(Vec<T>) -> Result<R, E>,
        E: Into<SortFailure>,
    {
        if trial_count == 0 {
            return Err(BenchError::NoTrials);
        }
        if u32::try_from(trial_count).is_err() {
            return Err(BenchError::TooManyTrials(trial_count));
        }

        let mut trials = Vec::with_capacity(trial_count);
        for trial in 0..trial_count {
            let copy = sequence.to_vec();

            let timer = Timer::start(&self.clock);
            let outcome = sort_fn(copy);
            let elapsed = timer.stop();

            match outcome {
                Ok(sorted) => {
                    // Dropped outside the timed span
                    std::hint::black_box(sorted);
                }
                Err(e) => {
                    return Err(BenchError::Measurement {
                        trial,
                        trial_count,
                        input_size: None,
                        source: e.into(),
                    });
                }
            }

            tracing::debug!(trial, elapsed_s = elapsed.as_secs_f64(), "trial complete");
            trials.push(elapsed);
        }

        let mean = mean_duration(&trials).ok_or(BenchError::NoTrials)?;
        Ok(Measurement { trials, mean })
    }

    /// Mean duration of `trial_count` timed runs of `sort_fn` on copies of `sequence`
    pub fn measure_mean<T, F, R, E>(
        &self,
        sort_fn: F,
        sequence: &[T],
        trial_count: usize,
    ) -> Result<Duration, BenchError>
    where
        T: Clone,
        F: FnMut(Vec<T>) -> Result<R, E>,
        E: Into<SortFailure>,
    {
        Ok(self.measure_trials(sort_fn, sequence, trial_count)?.mean)
    }

    /// Measure one pivot strategy of the sort engine on copies of `sequence`
    pub fn measure_strategy<T: Ord + Clone>(
        &self,
        strategy: PivotStrategy,
        sequence: &[T],
        trial_count: usize,
    ) -> Result<Measurement, BenchError> {
        self.measure_trials(
            |copy| Ok::<_, Infallible>(sort_owned(copy, strategy)),
            sequence,
            trial_count,
        )
    }

    /// Sweep `sizes` in order, measuring both strategies per size.
    pub fn run_sweep(
        &self,
        sizes: &[usize],
        max_value: u64,
        trial_count: usize,
    ) -> Result<Vec<AggregateResult>, BenchError> {
        self.run_sweep_with(sizes, max_value, trial_count, |_| {})
    }

    /// Sweep `sizes` in order, calling `on_result` after each size completes.
    pub fn run_sweep_with<O>(
        &self,
        sizes: &[usize],
        max_value: u64,
        trial_count: usize,
        on_result: O,
    ) -> Result<Vec<AggregateResult>, BenchError>
    where
        O: FnMut(&AggregateResult),
    {
        self.sweep(
            sizes,
            max_value,
            |strategy, input| self.measure_strategy(strategy, input, trial_count),
            on_result,
        )
    }

    /// Generate one input per size and hand the same data to `measure` for
    /// each strategy.
    pub(crate) fn sweep<M, O>(
        &self,
        sizes: &[usize],
        max_value: u64,
        mut measure: M,
        mut on_result: O,
    ) -> Result<Vec<AggregateResult>, BenchError>
    where
        M: FnMut(PivotStrategy, &[u64]) -> Result<Measurement, BenchError>,
        O: FnMut(&AggregateResult),
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut results = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let input = generate_input_with(&mut rng, size, max_value);

            let randomized =
                measure(PivotStrategy::Randomized, &input).map_err(|e| e.at_size(size))?;
            let deterministic =
                measure(PivotStrategy::Deterministic, &input).map_err(|e| e.at_size(size))?;

            tracing::info!(
                size,
                randomized_s = randomized.mean.as_secs_f64(),
                deterministic_s = deterministic.mean.as_secs_f64(),
                "size measured"
            );

            let result = AggregateResult {
                input_size: size,
                mean_randomized: randomized.mean,
                mean_deterministic: deterministic.mean,
                randomized_trials: randomized.trials,
                deterministic_trials: deterministic.trials,
            };
            on_result(&result);
            results.push(result);
        }

        Ok(results)
    }

    /// Run the sweep described by this runner's configuration
    pub fn run(&self) -> Result<Vec<AggregateResult>, BenchError> {
        self.run_with(|_| {})
    }

    /// Run the configured sweep, calling `on_result` after each size completes
    pub fn run_with<O>(&self, on_result: O) -> Result<Vec<AggregateResult>, BenchError>
    where
        O: FnMut(&AggregateResult),
    {
        self.config.validate()?;
        self.run_sweep_with(
            &self.config.sizes,
            self.config.max_value,
            self.config.trial_count,
            on_result,
        )
    }
}
