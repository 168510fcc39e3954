//! Progress snapshots for resumable onboarding.
//!
//! A snapshot captures where the user is in the flow - current step,
//! visit trail, completion flag - so a relaunched app can re-enter
//! mid-sequence instead of starting over. Captured answers are not part
//! of the snapshot; they already live in the settings store.

use crate::core::{Step, StepHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of sequencer position.
///
/// # Example
///
/// ```rust
/// use intake::sequencer::{Router, Sequencer};
/// use intake::settings::MemoryStore;
/// use intake::step_enum;
///
/// step_enum! {
///     pub enum Mini {
///         Welcome => "welcome",
///         Goals => "goalSelection",
///     }
/// }
///
/// let flow = Sequencer::new(
///     Mini::catalog(),
///     Router::catalog_order(Mini::catalog()),
///     Box::new(MemoryStore::new()),
/// )
/// .unwrap();
///
/// let snapshot = flow.snapshot();
/// let json = snapshot.to_json().unwrap();
/// let restored = intake::snapshot::ProgressSnapshot::<Mini>::from_json(&json).unwrap();
/// assert_eq!(restored.current, Mini::Welcome);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProgressSnapshot<S: Step> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The step that was active
    pub current: S,

    /// The visit trail at capture time
    pub history: StepHistory<S>,

    /// Whether the flow had already run to completion
    pub completed: bool,
}

impl<S: Step> ProgressSnapshot<S> {
    /// Capture a snapshot of the given position.
    pub fn capture(current: S, history: StepHistory<S>, completed: bool) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            current,
            history,
            completed,
        }
    }

    /// Check that this snapshot can be restored by this build.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if self.history.is_empty() {
            return Err(SnapshotError::ValidationFailed(
                "snapshot trail is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Encode as human-readable JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, validating the format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary, validating the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step_enum;

    step_enum! {
        enum TestFlow {
            Welcome => "welcome",
            Age => "ageSelection",
            Goals => "goalSelection",
        }
    }

    fn snapshot() -> ProgressSnapshot<TestFlow> {
        let mut trail = StepHistory::start(TestFlow::Welcome);
        trail.push(TestFlow::Age);
        ProgressSnapshot::capture(TestFlow::Age, trail, false)
    }

    #[test]
    fn capture_records_position_and_version() {
        let snap = snapshot();
        assert_eq!(snap.version, SNAPSHOT_VERSION);
        assert_eq!(snap.current, TestFlow::Age);
        assert_eq!(snap.history.len(), 2);
        assert!(!snap.completed);
    }

    #[test]
    fn json_round_trip_preserves_position() {
        let snap = snapshot();
        let json = snap.to_json().unwrap();
        let restored = ProgressSnapshot::<TestFlow>::from_json(&json).unwrap();

        assert_eq!(restored.id, snap.id);
        assert_eq!(restored.current, TestFlow::Age);
        assert_eq!(restored.history.len(), 2);
    }

    #[test]
    fn binary_round_trip_preserves_position() {
        let snap = snapshot();
        let bytes = snap.to_bytes().unwrap();
        let restored = ProgressSnapshot::<TestFlow>::from_bytes(&bytes).unwrap();

        assert_eq!(restored.id, snap.id);
        assert_eq!(restored.current, TestFlow::Age);
        assert_eq!(restored.completed, snap.completed);
    }

    #[test]
    fn unsupported_version_fails_validation() {
        let mut snap = snapshot();
        snap.version = 99;
        let json = serde_json::to_string(&snap).unwrap();

        let err = ProgressSnapshot::<TestFlow>::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion { found: 99, .. }
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = ProgressSnapshot::<TestFlow>::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, SnapshotError::DeserializationFailed(_)));
    }
}
