//! Report Metadata
//!
//! Captures when and where a sweep ran: UTC timestamp, crate version,
//! OS/architecture/core count, and the sweep configuration.

use chrono::Utc;
use pivotbench_core::BenchmarkConfig;
use pivotbench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata for a sweep run with `config`
pub fn build_report_meta(config: &BenchmarkConfig) -> ReportMeta {
    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system: SystemInfo::current(),
        config: ReportConfig::from(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_captures_config() {
        let config = BenchmarkConfig {
            seed: Some(9),
            ..BenchmarkConfig::default()
        };
        let meta = build_report_meta(&config);
        assert_eq!(meta.schema_version, SCHEMA_VERSION);
        assert_eq!(meta.config.seed, Some(9));
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.os.is_empty());
    }
}
