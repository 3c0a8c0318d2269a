//! Team member repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{TeamMember, TeamMemberId};
use crate::domain::DomainError;

/// Storage for team members
///
/// Implementations must apply each call atomically: a reader never observes a
/// half-applied write and concurrent writes are serialized.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamMemberRepository: Send + Sync + std::fmt::Debug {
    /// Get a team member by ID
    async fn get(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// List all team members ordered by ID
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError>;

    /// Insert a new team member, failing if the ID is taken
    async fn create(&self, member: TeamMember) -> Result<TeamMember, DomainError>;

    /// Replace an existing team member, failing if the ID is unknown
    async fn update(&self, member: TeamMember) -> Result<TeamMember, DomainError>;

    /// Delete a team member by ID, returns true if it existed
    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError>;

    /// Count stored team members
    async fn count(&self) -> Result<usize, DomainError>;
}
