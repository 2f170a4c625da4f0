//! Batch run orchestration used by the binary.

use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use futures::StreamExt;
use log::info;
use strum::IntoEnumIterator;

use crate::app::{collect_urls, print_bucket_statistics};
use crate::config::Config;
use crate::detect::{detect_batch, Detector};
use crate::error_handling::BucketStats;
use crate::fetch::HttpFetcher;
use crate::initialization::init_client;
use crate::scoring::Bucket;

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of URLs analyzed
    pub total_urls: usize,
    /// Results per bucket, in bucket declaration order
    pub by_bucket: Vec<(Bucket, usize)>,
    /// Results that carry a fetch error
    pub fetch_errors: usize,
    /// Wall-clock duration in seconds
    pub elapsed_seconds: f64,
}

/// Detects every configured URL and writes one JSON object per result to `out`.
///
/// # Errors
///
/// Returns an error if no URLs were given, the input file cannot be read, a
/// built-in pattern fails to compile, the HTTP client cannot be built, or
/// writing to `out` fails. Individual URL failures are reported in their
/// result, not here.
///
/// # Example
///
/// ```no_run
/// use site_origin::{run_detection, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     ..Default::default()
/// };
/// let report = run_detection(config, std::io::stdout()).await?;
/// println!("{} URLs analyzed", report.total_urls);
/// # Ok(())
/// # }
/// ```
pub async fn run_detection<W: Write>(config: Config, mut out: W) -> Result<RunReport> {
    let start = Instant::now();

    let urls = collect_urls(&config.urls, config.file.as_deref()).await?;
    if urls.is_empty() {
        bail!("No URLs to analyze: pass URLs as arguments or use --file");
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let fetcher = HttpFetcher::new(client, &config);
    let detector = Detector::new(fetcher)
        .context("Failed to load built-in pattern tables")?
        .with_script_fetch(!config.no_script_fetch)
        .with_pipeline_timeout(config.pipeline_timeout());

    info!(
        "Analyzing {} URL(s) with concurrency {}",
        urls.len(),
        config.max_concurrency
    );

    let stats = BucketStats::new();
    let mut results = std::pin::pin!(detect_batch(&detector, urls, config.max_concurrency));
    while let Some(result) = results.next().await {
        stats.record(result.bucket, result.is_error());
        serde_json::to_writer(&mut out, &result).context("Failed to serialize result")?;
        writeln!(out).context("Failed to write result")?;
    }
    out.flush().context("Failed to flush output")?;

    let elapsed_seconds = start.elapsed().as_secs_f64();
    print_bucket_statistics(&stats, elapsed_seconds);

    Ok(RunReport {
        total_urls: stats.total(),
        by_bucket: Bucket::iter().map(|b| (b, stats.count(b))).collect(),
        fetch_errors: stats.fetch_errors(),
        elapsed_seconds,
    })
}
