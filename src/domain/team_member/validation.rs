//! Team member validation

use thiserror::Error;

use super::entity::Role;

/// Errors that can occur during team member validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamMemberValidationError {
    #[error("Team member grade must be greater than zero, got {0}")]
    NonPositiveGrade(i32),

    #[error("Unknown team member role '{0}'")]
    UnknownRole(String),

    #[error("Invalid team member id '{0}'")]
    InvalidId(String),
}

/// Validate a team member grade
pub fn validate_grade(grade: i32) -> Result<(), TeamMemberValidationError> {
    if grade <= 0 {
        return Err(TeamMemberValidationError::NonPositiveGrade(grade));
    }

    Ok(())
}

/// Parse a role name, ignoring ASCII case
pub fn parse_role(value: &str) -> Result<Role, TeamMemberValidationError> {
    Role::ALL
        .iter()
        .copied()
        .find(|role| role.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| TeamMemberValidationError::UnknownRole(value.to_string()))
}
