// ==========================================
// OBEDIO Duty Scheduling Core - Domain Layer
// ==========================================
// Entities and value types only: no storage logic, no engine logic.

pub mod assignment;
pub mod group;
pub mod lane;
pub mod types;

// Re-export core types
pub use assignment::{Assignment, AssignmentPatch, NewAssignment};
pub use group::{Group, GroupMember};
pub use lane::{Lane, LaneTargets};
pub use types::{DistributionStrategy, DutyStatus, FillStatus};
