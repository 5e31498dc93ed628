// ==========================================
// OBEDIO Duty Scheduling Core - Assignment Store
// ==========================================
// The single in-memory collection of duty/standby bookings for a
// scheduling session. Insertion order is stable and is the only
// ordering guarantee the read projections give.
//
// The store validates lane membership and interval sanity but does
// NOT reject time overlaps: overlap policy belongs to the conflict
// detector, which callers run before committing.

use tracing::debug;
use uuid::Uuid;

use crate::domain::assignment::{Assignment, AssignmentPatch, NewAssignment};
use crate::domain::types::DutyStatus;
use crate::registry::error::{RegistryError, RegistryResult};
use crate::registry::lane_registry::LaneRegistry;

#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    assignments: Vec<Assignment>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    // ==========================================
    // Mutations
    // ==========================================

    /// Inserts a new booking with a fresh id.
    ///
    /// Validates `start < end` and that the lane exists in the active
    /// registry. Overlap checking is deliberately not done here.
    pub fn create(
        &mut self,
        lanes: &LaneRegistry,
        new: NewAssignment,
    ) -> RegistryResult<Assignment> {
        if new.start >= new.end {
            return Err(RegistryError::invalid_argument(
                "start",
                format!("start {} must be before end {}", new.start, new.end),
            ));
        }
        if !lanes.contains(&new.lane_id) {
            return Err(RegistryError::InvalidLane {
                lane_id: new.lane_id,
            });
        }

        let assignment = Assignment {
            id: Uuid::new_v4().to_string(),
            crew_id: new.crew_id,
            lane_id: new.lane_id,
            start: new.start,
            end: new.end,
            status: new.status,
        };
        debug!(
            assignment_id = %assignment.id,
            crew_id = %assignment.crew_id,
            lane_id = %assignment.lane_id,
            status = %assignment.status,
            "assignment created"
        );
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Merges a partial update into an existing booking.
    ///
    /// The merged interval must still satisfy `start < end`, and a
    /// changed lane must exist in the registry.
    pub fn update(
        &mut self,
        lanes: &LaneRegistry,
        id: &str,
        patch: AssignmentPatch,
    ) -> RegistryResult<Assignment> {
        if let Some(lane_id) = &patch.lane_id {
            if !lanes.contains(lane_id) {
                return Err(RegistryError::InvalidLane {
                    lane_id: lane_id.clone(),
                });
            }
        }

        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RegistryError::not_found("Assignment", id))?;

        let start = patch.start.unwrap_or(assignment.start);
        let end = patch.end.unwrap_or(assignment.end);
        if start >= end {
            return Err(RegistryError::invalid_argument(
                "start",
                format!("start {} must be before end {}", start, end),
            ));
        }

        if let Some(lane_id) = patch.lane_id {
            assignment.lane_id = lane_id;
        }
        assignment.start = start;
        assignment.end = end;
        if let Some(status) = patch.status {
            assignment.status = status;
        }
        Ok(assignment.clone())
    }

    /// Removes a booking. A second removal of the same id fails with
    /// `NotFound`; removal is not idempotent.
    pub fn remove(&mut self, id: &str) -> RegistryResult<Assignment> {
        let index = self
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| RegistryError::not_found("Assignment", id))?;
        Ok(self.assignments.remove(index))
    }

    /// Commits a batch of engine-proposed assignments.
    ///
    /// Validation runs over the whole batch before anything is
    /// inserted, so a bad record rejects the batch as a unit.
    pub fn commit(
        &mut self,
        lanes: &LaneRegistry,
        proposed: Vec<Assignment>,
    ) -> RegistryResult<()> {
        for assignment in &proposed {
            if assignment.start >= assignment.end {
                return Err(RegistryError::invalid_argument(
                    "start",
                    format!(
                        "start {} must be before end {}",
                        assignment.start, assignment.end
                    ),
                ));
            }
            if !lanes.contains(&assignment.lane_id) {
                return Err(RegistryError::InvalidLane {
                    lane_id: assignment.lane_id.clone(),
                });
            }
        }
        debug!(count = proposed.len(), "committing proposed assignments");
        self.assignments.extend(proposed);
        Ok(())
    }

    // ==========================================
    // Read projections (stable insertion order)
    // ==========================================

    pub fn get(&self, id: &str) -> RegistryResult<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| RegistryError::not_found("Assignment", id))
    }

    pub fn by_lane(&self, lane_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.lane_id == lane_id)
            .collect()
    }

    pub fn by_lane_and_status(&self, lane_id: &str, status: DutyStatus) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.lane_id == lane_id && a.status == status)
            .collect()
    }

    pub fn by_crew(&self, crew_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.crew_id == crew_id)
            .collect()
    }

    /// Current headcount in a (lane, status) bucket.
    pub fn occupancy(&self, lane_id: &str, status: DutyStatus) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.lane_id == lane_id && a.status == status)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
