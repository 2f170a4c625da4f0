//! End-of-run summary.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::BucketStats;
use crate::scoring::Bucket;

/// One-line summary of a finished batch.
pub(crate) fn summary_line(stats: &BucketStats, elapsed_seconds: f64) -> String {
    let total = stats.total();
    let per_bucket: Vec<String> = Bucket::iter()
        .map(|bucket| format!("{bucket}={}", stats.count(bucket)))
        .collect();
    format!(
        "Analyzed {total} URL{} in {elapsed_seconds:.1}s: {} ({} fetch error{})",
        if total == 1 { "" } else { "s" },
        per_bucket.join(", "),
        stats.fetch_errors(),
        if stats.fetch_errors() == 1 { "" } else { "s" },
    )
}

/// Logs the per-bucket breakdown and the one-line summary.
pub fn print_bucket_statistics(stats: &BucketStats, elapsed_seconds: f64) {
    let total = stats.total();
    if total > 0 {
        info!("Bucket breakdown:");
        for bucket in Bucket::iter() {
            let count = stats.count(bucket);
            if count > 0 {
                #[allow(clippy::cast_precision_loss)]
                let share = count as f64 * 100.0 / total as f64;
                info!("   {bucket}: {count} ({share:.1}%)");
            }
        }
    }
    info!("{}", summary_line(stats, elapsed_seconds));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let stats = BucketStats::new();
        stats.record(Bucket::PlatformAssisted, false);
        stats.record(Bucket::NoAiSignals, false);
        stats.record(Bucket::Unknown, true);
        let line = summary_line(&stats, 2.04);
        assert_eq!(
            line,
            "Analyzed 3 URLs in 2.0s: platform-assisted=1, ai-assisted=0, \
             no-ai-signals=1, unknown=1 (1 fetch error)"
        );
    }

    #[test]
    fn test_summary_line_singular() {
        let stats = BucketStats::new();
        stats.record(Bucket::AiAssisted, false);
        assert!(summary_line(&stats, 0.5).starts_with("Analyzed 1 URL in 0.5s"));
    }
}
