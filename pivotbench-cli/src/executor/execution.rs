//! Sweep Execution
//!
//! Runs the configured sweep in-process on the calling thread and reports
//! progress per input size.
//!
//! ## Data Flow
//!
//! ```text
//!   BenchmarkConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ BenchmarkRunner  │  generate input → time randomized → time deterministic
//! └────────┬─────────┘
//!          │
//!          ▼
//!  SweepOutcome (AggregateResult per size, wall time of the sweep)
//! ```
//!
//! A failing trial aborts the sweep; nothing is reported for the sizes that
//! did complete.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pivotbench_core::{AggregateResult, BenchError, BenchmarkConfig, BenchmarkRunner};
use std::time::Instant;

/// Results of one completed sweep
#[derive(Debug)]
pub struct SweepOutcome {
    /// One result per configured size, in configured order
    pub results: Vec<AggregateResult>,
    /// Wall time of the whole sweep (input generation included)
    pub total_duration_ms: f64,
}

/// Runs a sweep with a progress bar
pub struct Executor {
    config: BenchmarkConfig,
    show_progress: bool,
}

impl Executor {
    /// Create an executor for `config`
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Configuration this executor runs
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every configured size
    pub fn execute(&self) -> Result<SweepOutcome, BenchError> {
        self.config.validate()?;

        let pb = if self.show_progress {
            ProgressBar::new(self.config.sizes.len() as u64)
        } else {
            ProgressBar::with_draw_target(
                Some(self.config.sizes.len() as u64),
                ProgressDrawTarget::hidden(),
            )
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        if let Some(&first) = self.config.sizes.first() {
            pb.set_message(format!("n = {}", first));
        }

        tracing::info!(
            sizes = ?self.config.sizes,
            trials = self.config.trial_count,
            max_value = self.config.max_value,
            "starting sweep"
        );

        let start = Instant::now();
        let runner = BenchmarkRunner::new(self.config.clone());
        let sizes = &self.config.sizes;
        let mut completed = 0usize;

        let outcome = runner.run_with(|result| {
            completed += 1;
            pb.inc(1);
            match sizes.get(completed) {
                Some(next) => pb.set_message(format!("n = {}", next)),
                None => pb.set_message(format!("n = {} done", result.input_size)),
            }
        });

        let results = match outcome {
            Ok(results) => results,
            Err(e) => {
                pb.abandon_with_message("Failed");
                return Err(e);
            }
        };

        pb.finish_with_message("Complete");
        let total_duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(sizes = results.len(), total_duration_ms, "sweep complete");

        Ok(SweepOutcome {
            results,
            total_duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_small_sweep() {
        let executor = Executor::new(BenchmarkConfig {
            sizes: vec![32, 8],
            trial_count: 2,
            max_value: 50,
            seed: Some(1),
        })
        .with_progress(false);

        let outcome = executor.execute().unwrap();
        let sizes: Vec<_> = outcome.results.iter().map(|r| r.input_size).collect();
        assert_eq!(sizes, vec![32, 8]);
        assert!(outcome.total_duration_ms >= 0.0);
    }

    #[test]
    fn test_execute_rejects_invalid_config() {
        let executor = Executor::new(BenchmarkConfig {
            trial_count: 0,
            ..BenchmarkConfig::default()
        })
        .with_progress(false);
        assert!(matches!(executor.execute(), Err(BenchError::NoTrials)));
    }
}
