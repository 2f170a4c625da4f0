//! Bucket decision and confidence labeling.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::{AI_THRESHOLD, PLATFORM_THRESHOLD};

/// Origin classification of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    PlatformAssisted,
    AiAssisted,
    NoAiSignals,
    Unknown,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::PlatformAssisted => "platform-assisted",
            Bucket::AiAssisted => "ai-assisted",
            Bucket::NoAiSignals => "no-ai-signals",
            Bucket::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a score cleared its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketConfidence {
    None,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for BucketConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BucketConfidence::None => "none",
            BucketConfidence::Low => "low",
            BucketConfidence::Medium => "medium",
            BucketConfidence::High => "high",
        };
        f.write_str(label)
    }
}

/// Labels a score against its threshold.
///
/// `high` from 3x the threshold, `medium` from 1.5x, `low` from 1x, else
/// `none`. Integer arithmetic only, so 1.5x compares `2 * score` to `3 * T`.
pub fn confidence_for(score: u32, threshold: u32) -> BucketConfidence {
    let score = u64::from(score);
    let threshold = u64::from(threshold);
    if score >= 3 * threshold {
        BucketConfidence::High
    } else if 2 * score >= 3 * threshold {
        BucketConfidence::Medium
    } else if score >= threshold {
        BucketConfidence::Low
    } else {
        BucketConfidence::None
    }
}

/// One row of the per-platform score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformScore {
    pub platform: String,
    pub score: u32,
}

/// Index of the best-scoring platform.
///
/// Ties go to the platform declared first: a later entry only replaces the
/// current best with a strictly greater score. `None` for an empty table.
pub fn best_platform(scores: &[PlatformScore]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, entry) in scores.iter().enumerate() {
        match best {
            Some(current) if scores[current].score >= entry.score => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Outcome of the bucket state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub bucket: Bucket,
    pub confidence: BucketConfidence,
}

impl Decision {
    /// Terminal state for a page that could not be fetched.
    pub fn fetch_failed() -> Self {
        Self {
            bucket: Bucket::Unknown,
            confidence: BucketConfidence::None,
        }
    }

    pub fn is_platform(&self) -> bool {
        self.bucket == Bucket::PlatformAssisted
    }
}

/// Chooses the bucket for a fetched page.
///
/// Platform evidence wins over AI evidence when both clear their thresholds.
pub fn decide(best_platform_score: u32, ai_score: u32) -> Decision {
    if best_platform_score >= PLATFORM_THRESHOLD {
        Decision {
            bucket: Bucket::PlatformAssisted,
            confidence: confidence_for(best_platform_score, PLATFORM_THRESHOLD),
        }
    } else if ai_score >= AI_THRESHOLD {
        Decision {
            bucket: Bucket::AiAssisted,
            confidence: confidence_for(ai_score, AI_THRESHOLD),
        }
    } else {
        Decision {
            bucket: Bucket::NoAiSignals,
            confidence: BucketConfidence::None,
        }
    }
}
