//! Domain layer - Core business logic and entities

pub mod error;
pub mod team_member;

pub use error::DomainError;
pub use team_member::{Role, TeamMember, TeamMemberId, TeamMemberRepository};
