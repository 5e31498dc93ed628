// ==========================================
// OBEDIO Duty Scheduling Core - Lane Model
// ==========================================
// A lane is a named scheduling channel (role or location based,
// e.g. "Service", "Housekeeping", "Bridge Watch") with duty/standby
// headcount targets for the scheduling horizon.

use serde::{Deserialize, Serialize};

use crate::domain::types::DutyStatus;

// ==========================================
// LaneTargets - desired headcount per status
// ==========================================
// Static for a scheduling session; only explicit configuration
// actions mutate them, never the distribution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneTargets {
    pub on_duty: u32,
    pub standby: u32,
}

impl LaneTargets {
    pub fn new(on_duty: u32, standby: u32) -> Self {
        Self { on_duty, standby }
    }

    /// Target headcount for the given staffing status.
    pub fn for_status(&self, status: DutyStatus) -> u32 {
        match status {
            DutyStatus::Duty => self.on_duty,
            DutyStatus::Standby => self.standby,
        }
    }
}

// ==========================================
// Lane
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Display name; not load-bearing for the algorithm.
    pub label: String,
    /// Skill a crew member must carry to be eligible for this lane
    /// when a distribution run enables skill filtering. `None` means
    /// the lane accepts any member.
    pub required_skill: Option<String>,
    pub targets: LaneTargets,
}

impl Lane {
    pub fn new(id: impl Into<String>, label: impl Into<String>, targets: LaneTargets) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required_skill: None,
            targets,
        }
    }

    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skill = Some(skill.into());
        self
    }

    /// Whether a member with the given skills may be placed here
    /// under skill filtering.
    pub fn accepts_skills<'a>(&self, mut skills: impl Iterator<Item = &'a str>) -> bool {
        match &self.required_skill {
            None => true,
            Some(required) => skills.any(|s| s == required),
        }
    }
}
