//! Strategy Comparison
//!
//! Compares a baseline strategy's trials against a candidate's: speedup
//! ratio of the means, relative change, and Cohen's d on the raw trials.

use crate::summary::{SummaryStatistics, compute_summary};
use serde::{Deserialize, Serialize};

/// Result of comparing two sets of trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Summary statistics for baseline
    pub baseline_stats: SummaryStatistics,
    /// Summary statistics for candidate
    pub candidate_stats: SummaryStatistics,
    /// candidate mean / baseline mean (>1.0 = baseline is faster)
    pub speedup: f64,
    /// Relative change in percent: (candidate - baseline) / baseline * 100
    pub relative_change: f64,
    /// Effect size (Cohen's d, pooled standard deviation)
    pub effect_size: f64,
    /// Effect size interpretation
    pub effect_interpretation: EffectInterpretation,
}

/// Interpretation of effect size magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectInterpretation {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectInterpretation {
    /// Classify an effect size
    pub fn from_effect_size(d: f64) -> Self {
        match d.abs() {
            x if x < 0.2 => EffectInterpretation::Negligible,
            x if x < 0.5 => EffectInterpretation::Small,
            x if x < 0.8 => EffectInterpretation::Medium,
            _ => EffectInterpretation::Large,
        }
    }
}

impl std::fmt::Display for EffectInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectInterpretation::Negligible => write!(f, "negligible"),
            EffectInterpretation::Small => write!(f, "small"),
            EffectInterpretation::Medium => write!(f, "medium"),
            EffectInterpretation::Large => write!(f, "large"),
        }
    }
}

/// Errors from [`compare_trials`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    /// Baseline has no trials
    #[error("Baseline samples are empty")]
    EmptyBaseline,
    /// Candidate has no trials
    #[error("Candidate samples are empty")]
    EmptyCandidate,
    /// A zero baseline mean leaves the ratio undefined (clock too coarse)
    #[error("Baseline mean is zero")]
    ZeroBaseline,
}

/// Compare candidate trials against baseline trials (seconds)
pub fn compare_trials(
    baseline: &[f64],
    candidate: &[f64],
) -> Result<ComparisonResult, ComparisonError> {
    if baseline.is_empty() {
        return Err(ComparisonError::EmptyBaseline);
    }
    if candidate.is_empty() {
        return Err(ComparisonError::EmptyCandidate);
    }

    let baseline_stats = compute_summary(baseline);
    let candidate_stats = compute_summary(candidate);
    if baseline_stats.mean <= 0.0 {
        return Err(ComparisonError::ZeroBaseline);
    }

    let speedup = candidate_stats.mean / baseline_stats.mean;
    let relative_change = (speedup - 1.0) * 100.0;

    let pooled_std = ((baseline_stats.std_dev.powi(2) + candidate_stats.std_dev.powi(2)) / 2.0)
        .sqrt();
    let effect_size = if pooled_std > 0.0 {
        (candidate_stats.mean - baseline_stats.mean) / pooled_std
    } else {
        0.0
    };

    Ok(ComparisonResult {
        baseline_stats,
        candidate_stats,
        speedup,
        relative_change,
        effect_size,
        effect_interpretation: EffectInterpretation::from_effect_size(effect_size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_slowdown() {
        let baseline = vec![1.0, 1.1, 0.9, 1.0, 1.0];
        let candidate = vec![4.0, 4.2, 3.8, 4.0, 4.0];
        let result = compare_trials(&baseline, &candidate).unwrap();

        assert!((result.speedup - 4.0).abs() < 1e-9);
        assert!((result.relative_change - 300.0).abs() < 1e-6);
        assert!(result.effect_size > 0.8);
        assert_eq!(result.effect_interpretation, EffectInterpretation::Large);
    }

    #[test]
    fn test_identical_trials() {
        let trials = vec![2.0; 5];
        let result = compare_trials(&trials, &trials).unwrap();
        assert!((result.speedup - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.effect_size, 0.0);
        assert_eq!(result.effect_interpretation, EffectInterpretation::Negligible);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            compare_trials(&[], &[1.0]).unwrap_err(),
            ComparisonError::EmptyBaseline
        );
        assert_eq!(
            compare_trials(&[1.0], &[]).unwrap_err(),
            ComparisonError::EmptyCandidate
        );
        assert_eq!(
            compare_trials(&[0.0, 0.0], &[1.0]).unwrap_err(),
            ComparisonError::ZeroBaseline
        );
    }

    #[test]
    fn test_effect_thresholds() {
        assert_eq!(EffectInterpretation::from_effect_size(0.1), EffectInterpretation::Negligible);
        assert_eq!(EffectInterpretation::from_effect_size(-0.3), EffectInterpretation::Small);
        assert_eq!(EffectInterpretation::from_effect_size(0.6), EffectInterpretation::Medium);
        assert_eq!(EffectInterpretation::from_effect_size(2.0), EffectInterpretation::Large);
    }
}
