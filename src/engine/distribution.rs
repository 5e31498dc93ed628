// ==========================================
// OBEDIO Duty Scheduling Core - Auto-Distribution Engine
// ==========================================
// Places a group's members into lane duty/standby slots in a single
// deterministic pass over the members in insertion order.
//
// The engine is a pure function of its inputs: it reads the
// assignment store but never mutates it, returning proposed
// assignments the caller commits. Per-member placement failures are
// soft (conflict messages in the result); only structurally invalid
// input raises an error.

use std::collections::HashMap;

use chrono::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::assignment::Assignment;
use crate::domain::group::{Group, GroupMember};
use crate::domain::lane::Lane;
use crate::domain::types::{DistributionStrategy, DutyStatus};
use crate::engine::conflict::ConflictDetector;
use crate::registry::assignment_store::AssignmentStore;
use crate::registry::error::{RegistryError, RegistryResult};
use crate::registry::lane_registry::LaneRegistry;

// ==========================================
// TimeSlot - the interval new assignments occupy
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeSlot {
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: chrono::DateTime<chrono::Utc>,
}

impl TimeSlot {
    pub fn new(start: chrono::DateTime<chrono::Utc>, end: chrono::DateTime<chrono::Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

// ==========================================
// DistributionOptions - per-run knobs (not persisted)
// ==========================================
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DistributionOptions {
    pub strategy: DistributionStrategy,
    /// Minimum stagger between consecutively placed members' start
    /// times within the same (lane, status) bucket, so a full team
    /// does not check in simultaneously.
    pub stagger_minutes: u32,
    /// When false, the engine never pushes a (lane, status) bucket at
    /// or over its target.
    pub allow_overstaffing: bool,
    /// When true, a lane's required skill filters eligible members.
    pub respect_skills: bool,
    pub time_slot: TimeSlot,
}

// ==========================================
// DistributionSummary / DistributionResult
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DistributionSummary {
    pub total_members: usize,
    pub assigned: usize,
    pub duty_assignments: usize,
    pub standby_assignments: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DistributionResult {
    /// True iff every member was placed without conflict.
    pub success: bool,
    pub summary: DistributionSummary,
    /// One human-readable entry per member that could not be placed,
    /// in group member order.
    pub conflicts: Vec<String>,
    /// Proposed assignments; the caller commits them to the store.
    pub created_assignments: Vec<Assignment>,
}

// ==========================================
// DistributionEngine
// ==========================================
pub struct DistributionEngine {
    detector: ConflictDetector,
}

/// A (lane, status) placement bucket. Lane is an index into the
/// candidate lane slice so buckets stay `Copy`.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    lane_index: usize,
    status: DutyStatus,
}

impl DistributionEngine {
    pub fn new() -> Self {
        Self {
            detector: ConflictDetector::new(),
        }
    }

    /// Runs one distribution pass for `group`.
    ///
    /// Errors are raised only for structurally invalid input:
    /// - inverted time slot (`InvalidArgument`)
    /// - `preferred_only` with a preferred lane that is absent from
    ///   the registry (`NotFound`)
    ///
    /// Everything else - full buckets, skill mismatches, overlapping
    /// bookings, a missing lane hint under `preferred_only` - is a
    /// soft per-member failure reported in `conflicts`.
    #[instrument(skip(self, group, lanes, store, options), fields(
        group_id = %group.id,
        members = group.members.len(),
        strategy = %options.strategy,
        stagger_minutes = options.stagger_minutes,
    ))]
    pub fn distribute(
        &self,
        group: &Group,
        lanes: &LaneRegistry,
        store: &AssignmentStore,
        options: &DistributionOptions,
    ) -> RegistryResult<DistributionResult> {
        if options.time_slot.start >= options.time_slot.end {
            return Err(RegistryError::invalid_argument(
                "time_slot",
                format!(
                    "slot start {} must be before end {}",
                    options.time_slot.start, options.time_slot.end
                ),
            ));
        }

        let preferred_only = options.strategy == DistributionStrategy::PreferredOnly;
        if preferred_only {
            if let Some(lane_id) = &group.preferred_lane_id {
                if !lanes.contains(lane_id) {
                    return Err(RegistryError::not_found("Lane", lane_id.clone()));
                }
            }
        }
        // Every member fails individually when preferred_only has no
        // lane hint to work with.
        let missing_preferred = preferred_only && group.preferred_lane_id.is_none();

        let candidate_lanes = self.candidate_lanes(group, lanes, preferred_only);
        let static_buckets = self.static_bucket_order(options.strategy, &candidate_lanes);

        let slot_duration = options.time_slot.duration();
        let stagger = Duration::minutes(options.stagger_minutes as i64);

        // Occupancy per bucket, seeded lazily from the store and
        // advanced for each in-pass placement.
        let mut occupancy: HashMap<(String, DutyStatus), usize> = HashMap::new();
        // Run-local placement counts driving stagger offsets.
        let mut placed_in_bucket: HashMap<(String, DutyStatus), usize> = HashMap::new();

        let mut created_assignments: Vec<Assignment> = Vec::new();
        let mut conflicts: Vec<String> = Vec::new();
        let mut duty_assignments = 0usize;
        let mut standby_assignments = 0usize;

        // Balanced strategy rotates the leading status each time a
        // member is actually placed, so a run of failures does not
        // skew the duty/standby split.
        let mut rotation = DutyStatus::Duty;

        for member in &group.members {
            if missing_preferred {
                conflicts.push("no preferred lane set".to_string());
                continue;
            }

            let bucket_order: Vec<Bucket> =
                if options.strategy == DistributionStrategy::Balanced {
                    self.balanced_bucket_order(rotation, &candidate_lanes)
                } else {
                    static_buckets.clone()
                };

            let chosen = bucket_order.into_iter().find(|bucket| {
                let lane = candidate_lanes[bucket.lane_index];
                if options.respect_skills
                    && !lane.accepts_skills(member.skills.iter().map(String::as_str))
                {
                    return false;
                }
                if !options.allow_overstaffing {
                    let key = (lane.id.clone(), bucket.status);
                    let occ = *occupancy
                        .entry(key)
                        .or_insert_with(|| store.occupancy(&lane.id, bucket.status));
                    if occ >= lane.targets.for_status(bucket.status) as usize {
                        return false;
                    }
                }
                true
            });

            let Some(bucket) = chosen else {
                conflicts.push(format!("no available slot for {}", member.name));
                continue;
            };

            let lane = candidate_lanes[bucket.lane_index];
            let key = (lane.id.clone(), bucket.status);
            let already_placed = *placed_in_bucket.get(&key).unwrap_or(&0);
            let start = options.time_slot.start + stagger * already_placed as i32;
            let end = start + slot_duration;

            if self
                .detector
                .has_conflict(store, &member.id, start, end, None)
            {
                // Skip without consuming the slot; later members may
                // still take it.
                conflicts.push(format!("{} has a scheduling conflict", member.name));
                continue;
            }

            created_assignments.push(self.build_assignment(member, lane, bucket.status, start, end));
            match bucket.status {
                DutyStatus::Duty => duty_assignments += 1,
                DutyStatus::Standby => standby_assignments += 1,
            }
            *occupancy
                .entry(key.clone())
                .or_insert_with(|| store.occupancy(&lane.id, bucket.status)) += 1;
            *placed_in_bucket.entry(key).or_insert(0) += 1;
            rotation = rotation.other();
        }

        let assigned = created_assignments.len();
        debug!(
            assigned,
            conflicts = conflicts.len(),
            "distribution pass complete"
        );

        Ok(DistributionResult {
            success: conflicts.is_empty(),
            summary: DistributionSummary {
                total_members: group.members.len(),
                assigned,
                duty_assignments,
                standby_assignments,
            },
            conflicts,
            created_assignments,
        })
    }

    // ==========================================
    // Candidate ordering
    // ==========================================

    /// Lanes considered for this run, in placement priority order:
    /// the preferred lane (when set and registered) first, then the
    /// rest in registry order. `preferred_only` restricts the list to
    /// exactly the hint.
    fn candidate_lanes<'a>(
        &self,
        group: &Group,
        lanes: &'a LaneRegistry,
        preferred_only: bool,
    ) -> Vec<&'a Lane> {
        let preferred = group
            .preferred_lane_id
            .as_deref()
            .and_then(|id| lanes.get(id).ok());

        if preferred_only {
            return preferred.into_iter().collect();
        }

        let mut ordered: Vec<&Lane> = Vec::with_capacity(lanes.len());
        if let Some(lane) = preferred {
            ordered.push(lane);
        }
        for lane in lanes.lanes() {
            if Some(lane.id.as_str()) != group.preferred_lane_id.as_deref() {
                ordered.push(lane);
            }
        }
        ordered
    }

    /// Bucket order for the non-rotating strategies: every lane's
    /// leading-status bucket before any trailing-status bucket.
    fn static_bucket_order(
        &self,
        strategy: DistributionStrategy,
        candidate_lanes: &[&Lane],
    ) -> Vec<Bucket> {
        let leading = match strategy {
            DistributionStrategy::StandbyFirst => DutyStatus::Standby,
            // PreferredOnly fills duty before standby within its
            // single lane.
            _ => DutyStatus::Duty,
        };
        let mut buckets = Vec::with_capacity(candidate_lanes.len() * 2);
        for status in [leading, leading.other()] {
            for lane_index in 0..candidate_lanes.len() {
                buckets.push(Bucket { lane_index, status });
            }
        }
        buckets
    }

    /// Balanced: the current rotation status leads for this member,
    /// falling through to the other status when its buckets are full.
    fn balanced_bucket_order(&self, rotation: DutyStatus, candidate_lanes: &[&Lane]) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(candidate_lanes.len() * 2);
        for status in [rotation, rotation.other()] {
            for lane_index in 0..candidate_lanes.len() {
                buckets.push(Bucket { lane_index, status });
            }
        }
        buckets
    }

    fn build_assignment(
        &self,
        member: &GroupMember,
        lane: &Lane,
        status: DutyStatus,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Assignment {
        Assignment {
            id: Uuid::new_v4().to_string(),
            crew_id: member.id.clone(),
            lane_id: lane.id.clone(),
            start,
            end,
            status,
        }
    }
}

impl Default for DistributionEngine {
    fn default() -> Self {
        Self::new()
    }
}
