// ==========================================
// OBEDIO Duty Scheduling Core - Lane Registry
// ==========================================
// Read-mostly list of lanes for a scheduling session plus their
// staffing targets. Insertion order defines the lane iteration order
// the distribution engine uses, so it must stay stable.

use crate::domain::lane::{Lane, LaneTargets};
use crate::domain::types::DutyStatus;
use crate::registry::error::{RegistryError, RegistryResult};

#[derive(Debug, Clone, Default)]
pub struct LaneRegistry {
    lanes: Vec<Lane>,
}

impl LaneRegistry {
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Builds a registry from a lane list, rejecting duplicate ids.
    pub fn with_lanes(lanes: Vec<Lane>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for lane in lanes {
            registry.add_lane(lane)?;
        }
        Ok(registry)
    }

    /// Explicit configuration action: registers a new lane.
    pub fn add_lane(&mut self, lane: Lane) -> RegistryResult<()> {
        if self.contains(&lane.id) {
            return Err(RegistryError::invalid_argument(
                "lane.id",
                format!("lane id already registered: {}", lane.id),
            ));
        }
        self.lanes.push(lane);
        Ok(())
    }

    /// Explicit configuration action: replaces a lane's staffing
    /// targets. The distribution engine never calls this.
    pub fn set_targets(&mut self, lane_id: &str, targets: LaneTargets) -> RegistryResult<()> {
        let lane = self
            .lanes
            .iter_mut()
            .find(|l| l.id == lane_id)
            .ok_or_else(|| RegistryError::not_found("Lane", lane_id))?;
        lane.targets = targets;
        Ok(())
    }

    pub fn get(&self, lane_id: &str) -> RegistryResult<&Lane> {
        self.lanes
            .iter()
            .find(|l| l.id == lane_id)
            .ok_or_else(|| RegistryError::not_found("Lane", lane_id))
    }

    pub fn contains(&self, lane_id: &str) -> bool {
        self.lanes.iter().any(|l| l.id == lane_id)
    }

    /// Target headcount for a (lane, status) pair.
    pub fn target_for(&self, lane_id: &str, status: DutyStatus) -> RegistryResult<u32> {
        Ok(self.get(lane_id)?.targets.for_status(status))
    }

    /// Lanes in registration order.
    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}
