//! Prometheus metrics for run observability
//!
//! Exposes metrics in Prometheus text format at `/metrics`.
//!
//! ## Metrics Exposed
//!
//! - `armada_checks_total` - Total number of checks configured
//! - `armada_checks_completed` - Number of checks completed
//! - `armada_checks_passed` - Number of checks passed
//! - `armada_checks_failed` - Number of checks failed
//! - `armada_check_duration_seconds` - Duration of each check
//! - `armada_execution_status` - Current execution status (0=running, 1=completed, 2=failed)
//!
//! ## Scrape Configuration
//!
//! ```yaml
//! scrape_configs:
//!   - job_name: 'armada'
//!     static_configs:
//!       - targets: ['armada:8080']
//!     metrics_path: '/metrics'
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::fmt::Write;

use super::state::{ApiState, ExecutionStatus};

/// Generate Prometheus-format metrics
pub async fn metrics_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let summary = state.get_status_response();
    let results = state.get_results();

    let mut output = String::new();

    // Metadata
    writeln!(output, "# HELP armada_info Armada build information").unwrap();
    writeln!(output, "# TYPE armada_info gauge").unwrap();
    writeln!(
        output,
        "armada_info{{version=\"{}\"}} 1",
        env!("CARGO_PKG_VERSION")
    )
    .unwrap();
    writeln!(output).unwrap();

    // Execution status (gauge: 0=running, 1=completed, 2=failed)
    writeln!(
        output,
        "# HELP armada_execution_status Current execution status (0=running, 1=completed, 2=failed)"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_execution_status gauge").unwrap();
    let status_value = match summary.status {
        ExecutionStatus::Running => 0,
        ExecutionStatus::Completed => 1,
        ExecutionStatus::Failed => 2,
    };
    writeln!(output, "armada_execution_status {}", status_value).unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP armada_checks_total Total number of checks configured"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_checks_total gauge").unwrap();
    writeln!(output, "armada_checks_total {}", summary.checks_total).unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP armada_checks_completed Number of checks completed"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_checks_completed gauge").unwrap();
    writeln!(output, "armada_checks_completed {}", summary.checks_completed).unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP armada_checks_passed Number of checks that passed"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_checks_passed gauge").unwrap();
    writeln!(output, "armada_checks_passed {}", summary.checks_passed).unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP armada_checks_failed Number of checks that failed"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_checks_failed gauge").unwrap();
    writeln!(output, "armada_checks_failed {}", summary.checks_failed).unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP armada_elapsed_seconds Time elapsed since start"
    )
    .unwrap();
    writeln!(output, "# TYPE armada_elapsed_seconds gauge").unwrap();
    writeln!(
        output,
        "armada_elapsed_seconds {}",
        summary.elapsed_ms as f64 / 1000.0
    )
    .unwrap();
    writeln!(output).unwrap();

    // Per-check results
    if !results.is_empty() {
        writeln!(
            output,
            "# HELP armada_check_passed Whether a specific check passed (1) or failed (0)"
        )
        .unwrap();
        writeln!(output, "# TYPE armada_check_passed gauge").unwrap();
        for result in &results {
            let passed = if result.passed { 1 } else { 0 };
            writeln!(
                output,
                "armada_check_passed{{check=\"{}\"}} {}",
                result.check_name, passed
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        writeln!(
            output,
            "# HELP armada_check_duration_seconds Duration of each check"
        )
        .unwrap();
        writeln!(output, "# TYPE armada_check_duration_seconds gauge").unwrap();
        for result in &results {
            writeln!(
                output,
                "armada_check_duration_seconds{{check=\"{}\"}} {}",
                result.check_name,
                result.duration.as_secs_f64()
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        // Target results per check
        writeln!(
            output,
            "# HELP armada_check_targets_passed Number of targets that passed for each check"
        )
        .unwrap();
        writeln!(output, "# TYPE armada_check_targets_passed gauge").unwrap();
        for result in &results {
            let passed_count = result.target_results.iter().filter(|r| r.passed).count();
            writeln!(
                output,
                "armada_check_targets_passed{{check=\"{}\"}} {}",
                result.check_name, passed_count
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        writeln!(
            output,
            "# HELP armada_check_targets_total Total number of targets tested for each check"
        )
        .unwrap();
        writeln!(output, "# TYPE armada_check_targets_total gauge").unwrap();
        for result in &results {
            writeln!(
                output,
                "armada_check_targets_total{{check=\"{}\"}} {}",
                result.check_name,
                result.target_results.len()
            )
            .unwrap();
        }
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckResult;
    use std::time::Duration;

    #[tokio::test]
    async fn test_metrics_format() {
        let state = ApiState::new();
        state.set_total_checks(2);

        // Simulate a completed check
        let result = CheckResult::new("chain-status", vec![], Duration::from_secs(5));
        state.record_result(result);
        state.complete(true);

        let response = metrics_handler(State(state)).await;
        let response = response.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
