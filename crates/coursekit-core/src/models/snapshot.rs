//! Persisted program snapshot format.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Course;

/// Snapshot of a program as written to persistent storage.
///
/// The totals are captured when the snapshot is taken and are not re-derived
/// on load; use [`crate::ProgramBuilder::summarize`] for fresh values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSnapshot {
    /// Program members in order
    pub courses: Vec<Course>,

    /// When the snapshot was taken (UTC); absent in hand-written blobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// Total duration in minutes at snapshot time
    #[serde(default)]
    pub total_duration: u32,

    /// Total price at snapshot time
    #[serde(default)]
    pub total_price: f64,
}
