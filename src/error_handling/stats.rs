//! Batch outcome counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use crate::scoring::Bucket;

/// Thread-safe per-bucket result counter.
///
/// Every bucket is present from construction, so lookups never miss. Share it
/// across tasks behind an `Arc`.
#[derive(Debug)]
pub struct BucketStats {
    buckets: HashMap<Bucket, AtomicUsize>,
    fetch_errors: AtomicUsize,
}

impl BucketStats {
    pub fn new() -> Self {
        Self {
            buckets: Bucket::iter().map(|b| (b, AtomicUsize::new(0))).collect(),
            fetch_errors: AtomicUsize::new(0),
        }
    }

    /// Records one result.
    pub fn record(&self, bucket: Bucket, had_error: bool) {
        if let Some(counter) = self.buckets.get(&bucket) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        if had_error {
            self.fetch_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.buckets
            .get(&bucket)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    pub fn fetch_errors(&self) -> usize {
        self.fetch_errors.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        Bucket::iter().map(|b| self.count(b)).sum()
    }
}

impl Default for BucketStats {
    fn default() -> Self {
        Self::new()
    }
}
