// ==========================================
// OBEDIO Duty Scheduling Core - Conflict Detector
// ==========================================
// Pure query over the assignment store: does a proposed interval for
// a crew member collide with one of their existing bookings?
//
// Overlap rule (half-open intervals): existing.start < end AND
// start < existing.end. Touching bookings do not conflict; a watch
// ending at 12:00 hands over cleanly to one starting at 12:00.

use chrono::{DateTime, Utc};

use crate::domain::assignment::Assignment;
use crate::registry::assignment_store::AssignmentStore;

pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// Whether `[start, end)` collides with any existing booking for
    /// `crew_id`. `exclude` skips the assignment currently being
    /// edited so a booking never conflicts with itself.
    pub fn has_conflict(
        &self,
        store: &AssignmentStore,
        crew_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&str>,
    ) -> bool {
        self.find_conflict(store, crew_id, start, end, exclude)
            .is_some()
    }

    /// The first colliding booking in store order, if any. Callers
    /// building conflict messages want the offender, not a boolean.
    pub fn find_conflict<'a>(
        &self,
        store: &'a AssignmentStore,
        crew_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&str>,
    ) -> Option<&'a Assignment> {
        store
            .by_crew(crew_id)
            .into_iter()
            .filter(|a| exclude != Some(a.id.as_str()))
            .find(|a| a.overlaps(start, end))
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
