//! Team member domain module
//!
//! A team member is a named person with a single role and a positive grade.
//! The registry in `infrastructure::team_member` is the only owner of live
//! records.

mod entity;
mod repository;
mod validation;

pub use entity::{Role, TeamMember, TeamMemberId};
pub use repository::TeamMemberRepository;
pub use validation::{parse_role, validate_grade, TeamMemberValidationError};

#[cfg(test)]
pub use repository::MockTeamMemberRepository;
