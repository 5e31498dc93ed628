// ==========================================
// OBEDIO Duty Scheduling Core - Configuration
// ==========================================

pub mod distribution_profile;

pub use distribution_profile::DistributionProfile;
