// ==========================================
// OBEDIO Duty Scheduling Core - Distribution Profiles
// ==========================================
// Named presets bundling a strategy with its knobs, so the console
// can offer one-click distribution setups and reproduce a run with
// the same parameters later. A profile carries no time slot; the
// caller supplies that per run.

use serde::{Deserialize, Serialize};

use crate::domain::types::DistributionStrategy;
use crate::engine::distribution::{DistributionOptions, TimeSlot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionProfile {
    /// Profile id used for selection/reference.
    pub profile_id: String,

    /// Display name.
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub strategy: DistributionStrategy,

    #[serde(default)]
    pub stagger_minutes: u32,

    #[serde(default)]
    pub allow_overstaffing: bool,

    #[serde(default)]
    pub respect_skills: bool,
}

impl DistributionProfile {
    /// Materializes run options for a concrete time slot.
    pub fn to_options(&self, time_slot: TimeSlot) -> DistributionOptions {
        DistributionOptions {
            strategy: self.strategy,
            stagger_minutes: self.stagger_minutes,
            allow_overstaffing: self.allow_overstaffing,
            respect_skills: self.respect_skills,
            time_slot,
        }
    }

    /// Built-in presets offered by the console.
    pub fn builtin() -> Vec<DistributionProfile> {
        vec![
            DistributionProfile {
                profile_id: "standard_rotation".to_string(),
                title: "Standard rotation".to_string(),
                description: Some("Fill duty posts first, 15 minute check-in stagger".to_string()),
                strategy: DistributionStrategy::DutyFirst,
                stagger_minutes: 15,
                allow_overstaffing: false,
                respect_skills: false,
            },
            DistributionProfile {
                profile_id: "balanced_watch".to_string(),
                title: "Balanced watch".to_string(),
                description: Some("Alternate duty and standby across the team".to_string()),
                strategy: DistributionStrategy::Balanced,
                stagger_minutes: 15,
                allow_overstaffing: false,
                respect_skills: false,
            },
            DistributionProfile {
                profile_id: "night_watch".to_string(),
                title: "Night watch".to_string(),
                description: Some("Standby cover first, no stagger".to_string()),
                strategy: DistributionStrategy::StandbyFirst,
                stagger_minutes: 0,
                allow_overstaffing: false,
                respect_skills: false,
            },
            DistributionProfile {
                profile_id: "strict_teams".to_string(),
                title: "Strict teams".to_string(),
                description: Some(
                    "Preferred lane only, qualified crew only".to_string(),
                ),
                strategy: DistributionStrategy::PreferredOnly,
                stagger_minutes: 15,
                allow_overstaffing: false,
                respect_skills: true,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_builtin_profile_ids_are_unique() {
        let profiles = DistributionProfile::builtin();
        let mut ids: Vec<&str> = profiles.iter().map(|p| p.profile_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), profiles.len());
    }

    #[test]
    fn test_to_options_carries_the_knobs() {
        let profile = &DistributionProfile::builtin()[0];
        let slot = TimeSlot::new(
            Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
        );
        let options = profile.to_options(slot);
        assert_eq!(options.strategy, DistributionStrategy::DutyFirst);
        assert_eq!(options.stagger_minutes, 15);
        assert_eq!(options.time_slot, slot);
    }

    #[test]
    fn test_profile_json_round_trip() {
        let profile = &DistributionProfile::builtin()[3];
        let json = serde_json::to_string(profile).unwrap();
        let back: DistributionProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile_id, "strict_teams");
        assert_eq!(back.strategy, DistributionStrategy::PreferredOnly);
        assert!(back.respect_skills);
    }

    #[test]
    fn test_missing_knobs_default_off() {
        let json = r#"{"profile_id":"p1","title":"Bare","strategy":"duty_first"}"#;
        let profile: DistributionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.stagger_minutes, 0);
        assert!(!profile.allow_overstaffing);
        assert!(!profile.respect_skills);
    }
}
