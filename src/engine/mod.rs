// ==========================================
// OBEDIO Duty Scheduling Core - Engine Layer
// ==========================================
// Pure scheduling engines. Engines read the stores and report
// reasons for every skipped placement; they never mutate shared
// state themselves.

pub mod conflict;
pub mod distribution;

pub use conflict::ConflictDetector;
pub use distribution::{
    DistributionEngine, DistributionOptions, DistributionResult, DistributionSummary, TimeSlot,
};
