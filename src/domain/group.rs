// ==========================================
// OBEDIO Duty Scheduling Core - Group Model
// ==========================================
// A group is a named, insertion-ordered collection of crew member
// references used for bulk scheduling. Member order is load-bearing:
// it determines placement priority and stagger offsets in the
// distribution engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::types::FillStatus;

// ==========================================
// GroupMember
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl GroupMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: BTreeSet::new(),
        }
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }
}

// ==========================================
// Group
// ==========================================
// Scheduling convenience only: committed assignments never cascade
// when a group is edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    /// Desired member count; minimum 1. Drives fill-status display,
    /// never placement (only lane targets gate placement).
    pub target_slots: u32,
    /// Optional lane hint consumed by the distribution engine.
    pub preferred_lane_id: Option<String>,
    pub members: Vec<GroupMember>,
}

impl Group {
    /// Fill classification of the current roster against the target.
    pub fn fill_status(&self) -> FillStatus {
        FillStatus::classify(self.members.len(), self.target_slots)
    }

    pub fn contains_member(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
