// ==========================================
// OBEDIO Duty Scheduling Core - Assignment Model
// ==========================================
// An assignment is a crew member's time-bounded booking into a lane
// under a duty/standby status. Intervals are half-open [start, end):
// touching bookings (end1 == start2) do NOT overlap. That boundary
// rule is the core conflict invariant and is tested explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::DutyStatus;

// ==========================================
// Assignment
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique id, generated at creation time.
    pub id: String,
    /// Crew member reference (foreign, not owned by the core).
    pub crew_id: String,
    /// Lane reference; must exist in the active lane registry.
    pub lane_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: DutyStatus,
}

impl Assignment {
    /// Half-open interval overlap against [start, end).
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

// ==========================================
// NewAssignment - creation payload (no id yet)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub crew_id: String,
    pub lane_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: DutyStatus,
}

// ==========================================
// AssignmentPatch - partial update payload
// ==========================================
// Absent fields keep their current value. Crew identity is not
// editable; move the booking by lane/time/status instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentPatch {
    #[serde(default)]
    pub lane_id: Option<String>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<DutyStatus>,
}

impl AssignmentPatch {
    pub fn is_empty(&self) -> bool {
        self.lane_id.is_none() && self.start.is_none() && self.end.is_none() && self.status.is_none()
    }
}
