// ==========================================
// OBEDIO Duty Scheduling Core
// ==========================================
// Crew duty timeline and auto-distribution engine for the OBEDIO
// console. The crate owns the scheduling data model, conflict
// detection and the auto-distribution algorithm; persistence, HTTP
// transport and rendering live in the surrounding application.

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Registry layer - in-memory stores
pub mod registry;

// Engine layer - business rules
pub mod engine;

// Configuration layer - distribution profiles
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::types::{DistributionStrategy, DutyStatus, FillStatus};

// Domain entities
pub use domain::{Assignment, AssignmentPatch, Group, GroupMember, Lane, LaneTargets, NewAssignment};

// Registries and stores
pub use registry::{AssignmentStore, GroupRegistry, LaneRegistry, RegistryError, RegistryResult};

// Engines
pub use engine::{
    ConflictDetector, DistributionEngine, DistributionOptions, DistributionResult,
    DistributionSummary, TimeSlot,
};

// Configuration
pub use config::DistributionProfile;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "OBEDIO Duty Scheduling Core";
