//! Team member registry - the authoritative set of team members

use std::sync::Arc;

use tracing::{debug, info};

use super::repository::InMemoryTeamMemberRepository;
use crate::domain::team_member::{
    Role, TeamMember, TeamMemberId, TeamMemberRepository, TeamMemberValidationError,
};
use crate::domain::DomainError;

/// Members a default registry starts with
const DEFAULT_ROSTER: [(&str, Role, i32); 6] = [
    ("John", Role::DotNet, 5),
    ("Franc", Role::DotNet, 6),
    ("Robert", Role::Java, 2),
    ("Alex", Role::Angular, 5),
    ("Jack", Role::React, 3),
    ("Tom", Role::Angular, 6),
];

/// Build the default roster, each member with a fresh ID
pub fn default_roster() -> Result<Vec<TeamMember>, TeamMemberValidationError> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, role, grade)| TeamMember::create(*name, *role, *grade))
        .collect()
}

fn not_found(id: &TeamMemberId) -> DomainError {
    DomainError::not_found(format!("Team member with given id '{}' does not exist.", id))
}

/// Registry serving lookups and mutations over team members
///
/// Every operation maps to a single repository call, so atomicity is whatever
/// the repository guarantees per call.
#[derive(Debug, Clone)]
pub struct TeamMemberRegistry {
    repository: Arc<dyn TeamMemberRepository>,
}

impl TeamMemberRegistry {
    /// Create a registry over the given repository
    pub fn new(repository: Arc<dyn TeamMemberRepository>) -> Self {
        Self { repository }
    }

    /// Create an in-memory registry seeded with the default roster
    pub fn with_default_roster() -> Result<Self, DomainError> {
        let members = default_roster()?;
        info!(count = members.len(), "Seeding team member registry with default roster");

        Ok(Self::new(Arc::new(InMemoryTeamMemberRepository::with_members(
            members,
        ))))
    }

    /// Create an empty in-memory registry
    pub fn empty() -> Self {
        Self::new(Arc::new(InMemoryTeamMemberRepository::new()))
    }

    /// Get a team member by ID
    pub async fn get_by_id(&self, id: &TeamMemberId) -> Result<TeamMember, DomainError> {
        debug!(id = %id, "Getting team member");

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all team members ordered by ID
    pub async fn get_all(&self) -> Result<Vec<TeamMember>, DomainError> {
        let mut members = self.repository.list().await?;
        members.sort_by_key(TeamMember::id);

        Ok(members)
    }

    /// Number of registered team members
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// List team members holding any of the given roles, ordered by ID
    pub async fn get_by_roles(&self, roles: &[Role]) -> Result<Vec<TeamMember>, DomainError> {
        debug!(roles = ?roles, "Getting team members by roles");

        if roles.is_empty() {
            return Ok(Vec::new());
        }

        let mut members = self.get_all().await?;
        members.retain(|member| roles.contains(&member.role()));

        Ok(members)
    }

    /// Add a team member and return its ID
    pub async fn add(&self, member: TeamMember) -> Result<TeamMemberId, DomainError> {
        info!(id = %member.id(), name = %member.name(), role = %member.role(), "Adding team member");

        let created = self.repository.create(member).await?;
        Ok(created.id())
    }

    /// Replace the stored team member that has the same ID
    pub async fn update(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        info!(id = %member.id(), "Updating team member");

        let id = member.id();
        self.repository.update(member).await.map_err(|e| {
            if e.is_not_found() { not_found(&id) } else { e }
        })
    }

    /// Remove a team member by ID
    pub async fn remove(&self, id: &TeamMemberId) -> Result<(), DomainError> {
        info!(id = %id, "Removing team member");

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
