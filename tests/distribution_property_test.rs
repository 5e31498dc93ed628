// ==========================================
// Randomized scheduling property tests
// ==========================================
// Seeded randomized inputs checking the invariants the engine must
// hold for any assignment population:
// - conflict detection agrees with a brute-force interval oracle
// - allow_overstaffing=false never pushes a bucket past
//   max(occupancy_before, target)
// - assigned + conflicts == member count
// - identical inputs give identical placements
// - stagger offsets grow by exact increments per bucket

use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use obedio_duty_core::domain::assignment::NewAssignment;
use obedio_duty_core::domain::group::{Group, GroupMember};
use obedio_duty_core::domain::lane::{Lane, LaneTargets};
use obedio_duty_core::domain::types::{DistributionStrategy, DutyStatus};
use obedio_duty_core::engine::{ConflictDetector, DistributionEngine, DistributionOptions, TimeSlot};
use obedio_duty_core::registry::{AssignmentStore, LaneRegistry};

// ==========================================
// Random input builders
// ==========================================

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap()
}

fn hour(h: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(h)
}

fn random_lanes(rng: &mut StdRng) -> LaneRegistry {
    let lane_count = rng.random_range(1..=4);
    let lanes: Vec<Lane> = (0..lane_count)
        .map(|i| {
            Lane::new(
                format!("lane-{}", i),
                format!("Lane {}", i),
                LaneTargets::new(rng.random_range(0..=3), rng.random_range(0..=2)),
            )
        })
        .collect();
    LaneRegistry::with_lanes(lanes).unwrap()
}

fn random_population(rng: &mut StdRng, lanes: &LaneRegistry) -> AssignmentStore {
    let lane_ids: Vec<String> = lanes.lanes().map(|l| l.id.clone()).collect();
    let mut store = AssignmentStore::new();
    let booking_count = rng.random_range(0..20);
    for _ in 0..booking_count {
        let start_h = rng.random_range(0..40);
        let duration_h = rng.random_range(1..=8);
        let status = if rng.random_bool(0.5) {
            DutyStatus::Duty
        } else {
            DutyStatus::Standby
        };
        store
            .create(
                lanes,
                NewAssignment {
                    crew_id: format!("crew-{}", rng.random_range(0..6)),
                    lane_id: lane_ids[rng.random_range(0..lane_ids.len())].clone(),
                    start: hour(start_h),
                    end: hour(start_h + duration_h),
                    status,
                },
            )
            .unwrap();
    }
    store
}

fn random_group(rng: &mut StdRng) -> Group {
    let member_count = rng.random_range(0..8);
    Group {
        id: "g-prop".to_string(),
        title: "Property Team".to_string(),
        target_slots: rng.random_range(1..=4),
        preferred_lane_id: None,
        members: (0..member_count)
            .map(|i| GroupMember::new(format!("crew-{}", i), format!("Member {}", i)))
            .collect(),
    }
}

fn random_options(rng: &mut StdRng) -> DistributionOptions {
    let strategy = match rng.random_range(0..3) {
        0 => DistributionStrategy::DutyFirst,
        1 => DistributionStrategy::Balanced,
        _ => DistributionStrategy::StandbyFirst,
    };
    let start_h = rng.random_range(0..24);
    DistributionOptions {
        strategy,
        stagger_minutes: rng.random_range(0..=30),
        allow_overstaffing: false,
        respect_skills: false,
        time_slot: TimeSlot::new(hour(start_h), hour(start_h + rng.random_range(1..=8))),
    }
}

// ==========================================
// Conflict detector vs brute-force oracle
// ==========================================

#[test]
fn test_conflict_detector_matches_brute_force_oracle() {
    let mut rng = StdRng::seed_from_u64(7);
    let detector = ConflictDetector::new();

    for _ in 0..200 {
        let lanes = random_lanes(&mut rng);
        let store = random_population(&mut rng, &lanes);

        let crew_id = format!("crew-{}", rng.random_range(0..6));
        let start_h = rng.random_range(0..44);
        let probe_start = hour(start_h);
        let probe_end = hour(start_h + rng.random_range(1..=6));

        let expected = store
            .iter()
            .filter(|a| a.crew_id == crew_id)
            .any(|a| a.start < probe_end && probe_start < a.end);

        assert_eq!(
            detector.has_conflict(&store, &crew_id, probe_start, probe_end, None),
            expected
        );
    }
}

#[test]
fn test_touching_bookings_are_never_flagged() {
    let mut rng = StdRng::seed_from_u64(11);
    let detector = ConflictDetector::new();
    let lanes = random_lanes(&mut rng);
    let store = random_population(&mut rng, &lanes);

    // Probe exactly adjacent to every existing booking.
    for assignment in store.iter() {
        assert!(!detector.has_conflict(
            &store,
            &assignment.crew_id,
            assignment.end,
            assignment.end + Duration::hours(1),
            None
        ) || store.iter().any(|other| other.id != assignment.id
            && other.crew_id == assignment.crew_id
            && other.overlaps(assignment.end, assignment.end + Duration::hours(1))));
    }
}

// ==========================================
// Engine invariants over random inputs
// ==========================================

#[test]
fn test_targets_never_exceeded_without_overstaffing() {
    let mut rng = StdRng::seed_from_u64(23);
    let engine = DistributionEngine::new();

    for _ in 0..100 {
        let lanes = random_lanes(&mut rng);
        let store = random_population(&mut rng, &lanes);
        let group = random_group(&mut rng);
        let options = random_options(&mut rng);

        let result = engine.distribute(&group, &lanes, &store, &options).unwrap();

        let mut created_per_bucket: HashMap<(String, DutyStatus), usize> = HashMap::new();
        for a in &result.created_assignments {
            *created_per_bucket
                .entry((a.lane_id.clone(), a.status))
                .or_insert(0) += 1;
        }

        for lane in lanes.lanes() {
            for status in [DutyStatus::Duty, DutyStatus::Standby] {
                let before = store.occupancy(&lane.id, status);
                let created = created_per_bucket
                    .get(&(lane.id.clone(), status))
                    .copied()
                    .unwrap_or(0);
                let after = before + created;
                let target = lane.targets.for_status(status) as usize;
                assert!(
                    after <= before.max(target),
                    "bucket ({}, {}) went from {} to {} past target {}",
                    lane.id,
                    status,
                    before,
                    after,
                    target
                );
            }
        }
    }
}

#[test]
fn test_assigned_plus_conflicts_equals_members() {
    let mut rng = StdRng::seed_from_u64(31);
    let engine = DistributionEngine::new();

    for _ in 0..100 {
        let lanes = random_lanes(&mut rng);
        let store = random_population(&mut rng, &lanes);
        let group = random_group(&mut rng);
        let options = random_options(&mut rng);

        let result = engine.distribute(&group, &lanes, &store, &options).unwrap();
        assert_eq!(
            result.summary.assigned + result.conflicts.len(),
            group.members.len()
        );
        assert_eq!(
            result.summary.duty_assignments + result.summary.standby_assignments,
            result.summary.assigned
        );
        assert_eq!(result.success, result.conflicts.is_empty());
    }
}

#[test]
fn test_identical_inputs_give_identical_placements() {
    let mut rng = StdRng::seed_from_u64(43);
    let engine = DistributionEngine::new();

    for _ in 0..50 {
        let lanes = random_lanes(&mut rng);
        let store = random_population(&mut rng, &lanes);
        let group = random_group(&mut rng);
        let options = random_options(&mut rng);

        let first = engine.distribute(&group, &lanes, &store, &options).unwrap();
        let second = engine.distribute(&group, &lanes, &store, &options).unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.conflicts, second.conflicts);
        let strip = |r: &obedio_duty_core::DistributionResult| {
            r.created_assignments
                .iter()
                .map(|a| (a.crew_id.clone(), a.lane_id.clone(), a.start, a.end, a.status))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&first), strip(&second));
    }
}

#[test]
fn test_stagger_monotonic_within_each_bucket() {
    let mut rng = StdRng::seed_from_u64(59);
    let engine = DistributionEngine::new();

    for _ in 0..100 {
        let lanes = random_lanes(&mut rng);
        // Empty store so in-pass placements are the whole bucket.
        let store = AssignmentStore::new();
        let group = random_group(&mut rng);
        let options = random_options(&mut rng);

        let result = engine.distribute(&group, &lanes, &store, &options).unwrap();

        let stagger = Duration::minutes(options.stagger_minutes as i64);
        let mut seen_per_bucket: HashMap<(String, DutyStatus), usize> = HashMap::new();
        for a in &result.created_assignments {
            let index = seen_per_bucket
                .entry((a.lane_id.clone(), a.status))
                .or_insert(0);
            let expected_start = options.time_slot.start + stagger * (*index as i32);
            assert_eq!(a.start, expected_start);
            assert_eq!(a.end - a.start, options.time_slot.duration());
            *index += 1;
        }
    }
}
