// ==========================================
// OBEDIO Duty Scheduling Core - Domain Types
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Duty Status
// ==========================================
// A crew member's staffing state within a lane at a given time.
// Serialized as snake_case to match the assignment payloads the
// console exchanges with the backing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Duty,
    Standby,
}

impl DutyStatus {
    /// The opposite staffing state.
    pub fn other(&self) -> Self {
        match self {
            DutyStatus::Duty => DutyStatus::Standby,
            DutyStatus::Standby => DutyStatus::Duty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::Duty => "duty",
            DutyStatus::Standby => "standby",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// Distribution Strategy
// ==========================================
// Selected per distribution run; never persisted with assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStrategy {
    DutyFirst,
    Balanced,
    StandbyFirst,
    PreferredOnly,
}

impl DistributionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionStrategy::DutyFirst => "duty_first",
            DistributionStrategy::Balanced => "balanced",
            DistributionStrategy::StandbyFirst => "standby_first",
            DistributionStrategy::PreferredOnly => "preferred_only",
        }
    }
}

impl Default for DistributionStrategy {
    fn default() -> Self {
        DistributionStrategy::DutyFirst
    }
}

impl fmt::Display for DistributionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DistributionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duty_first" | "duty-first" => Ok(DistributionStrategy::DutyFirst),
            "balanced" => Ok(DistributionStrategy::Balanced),
            "standby_first" | "standby-first" => Ok(DistributionStrategy::StandbyFirst),
            "preferred_only" | "preferred-only" => Ok(DistributionStrategy::PreferredOnly),
            other => Err(format!("unknown distribution strategy: {}", other)),
        }
    }
}

// ==========================================
// Fill Status
// ==========================================
// Derived classification of a group's member count against its
// target slots. Pure UI/reporting concern; the distribution engine
// never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStatus {
    Underfilled,
    Met,
    Overfilled,
}

impl FillStatus {
    /// Classifies a member count against a target slot count.
    pub fn classify(member_count: usize, target_slots: u32) -> Self {
        let target = target_slots as usize;
        if member_count < target {
            FillStatus::Underfilled
        } else if member_count == target {
            FillStatus::Met
        } else {
            FillStatus::Overfilled
        }
    }
}

impl fmt::Display for FillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStatus::Underfilled => write!(f, "underfilled"),
            FillStatus::Met => write!(f, "met"),
            FillStatus::Overfilled => write!(f, "overfilled"),
        }
    }
}
