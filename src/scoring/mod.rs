//! Score aggregation and the bucket decision.
//!
//! Both halves are pure functions over already-computed signals.

mod aggregate;
mod decision;

pub use aggregate::score;
pub use decision::{
    best_platform, confidence_for, decide, Bucket, BucketConfidence, Decision, PlatformScore,
};
