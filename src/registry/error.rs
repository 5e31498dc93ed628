// ==========================================
// OBEDIO Duty Scheduling Core - Registry Errors
// ==========================================
// Error taxonomy for the lane registry, assignment store and group
// registry. Per-member placement failures inside a distribution run
// are NOT errors; they surface as conflict entries in the
// distribution result.

use thiserror::Error;

/// Registry/store layer error type
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("invalid argument (field={field}): {message}")]
    InvalidArgument { field: String, message: String },

    #[error("invalid lane: {lane_id} is not in the active lane registry")]
    InvalidLane { lane_id: String },

    #[error("duplicate member: {member_id} is already in group {group_id}")]
    DuplicateMember { group_id: String, member_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RegistryError {
    /// Shorthand for the most common variant.
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        RegistryError::NotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }

    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        RegistryError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;
