// ==========================================
// OBEDIO Duty Scheduling Core - Registry Layer
// ==========================================
// In-memory stores for a scheduling session: lanes, assignments,
// groups. Single-writer by design; the distribution engine only
// reads these and returns proposed mutations.

pub mod assignment_store;
pub mod error;
pub mod group_registry;
pub mod lane_registry;

pub use assignment_store::AssignmentStore;
pub use error::{RegistryError, RegistryResult};
pub use group_registry::GroupRegistry;
pub use lane_registry::LaneRegistry;
