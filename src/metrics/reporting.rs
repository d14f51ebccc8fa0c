//! Console output for a finished run

use crate::constants::REPORT_BANNER_WIDTH;
use crate::metrics::report::MetricsReport;

use std::fmt::Write;

impl MetricsReport {
    /// Human-readable report, all figures to two decimals
    pub fn render(&self) -> String {
        let banner = "=".repeat(REPORT_BANNER_WIDTH);
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(out, "Language: {}", self.label.to_uppercase());
        let _ = writeln!(out, "{}", banner);
        let _ = writeln!(out, "Total Requests: {}", self.total_requests);
        let _ = writeln!(out, "Successful: {}", self.successful_requests);
        let _ = writeln!(out, "Failed: {}", self.failed_requests);
        let _ = writeln!(out, "Total Time: {:.2}s", self.total_time_seconds);
        let _ = writeln!(out, "Requests/sec: {:.2}", self.requests_per_second);

        if let Some(times) = &self.response_times {
            let _ = writeln!(out, "\nResponse Times (ms):");
            let _ = writeln!(out, "  Min: {:.2}", times.min_ms);
            let _ = writeln!(out, "  Max: {:.2}", times.max_ms);
            let _ = writeln!(out, "  Avg: {:.2}", times.average_ms);
            let _ = writeln!(out, "  Median: {:.2}", times.median_ms);
            let _ = writeln!(out, "  P95: {:.2}", times.p95_ms);
            let _ = writeln!(out, "  P99: {:.2}", times.p99_ms);
        }

        let _ = writeln!(out, "{}", banner);
        out
    }

    /// Print the report to stdout
    pub fn print_report(&self) {
        println!("\n{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use crate::metrics::report::{MetricsReport, ResponseTimes};

    fn report(response_times: Option<ResponseTimes>) -> MetricsReport {
        MetricsReport {
            label: "rust".to_string(),
            total_requests: 50,
            successful_requests: if response_times.is_some() { 49 } else { 0 },
            failed_requests: if response_times.is_some() { 1 } else { 50 },
            total_time_seconds: 1.5,
            requests_per_second: 33.333,
            response_times,
            timeseries: vec![],
        }
    }

    #[test]
    fn test_render_with_latencies() {
        let rendered = report(Some(ResponseTimes {
            min_ms: 1.0,
            max_ms: 9.5,
            average_ms: 4.25,
            median_ms: 4.0,
            p95_ms: 9.0,
            p99_ms: 9.5,
        }))
        .render();

        assert!(rendered.starts_with(&"=".repeat(60)));
        assert!(rendered.contains("Language: RUST"));
        assert!(rendered.contains("Total Requests: 50"));
        assert!(rendered.contains("Total Time: 1.50s"));
        assert!(rendered.contains("Requests/sec: 33.33"));
        assert!(rendered.contains("  P95: 9.00"));
        assert!(rendered.contains("  Median: 4.00"));
    }

    #[test]
    fn test_render_without_successes_omits_latencies() {
        let rendered = report(None).render();
        assert!(rendered.contains("Failed: 50"));
        assert!(!rendered.contains("Response Times"));
    }
}
