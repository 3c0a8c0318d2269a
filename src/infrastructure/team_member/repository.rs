//! In-memory team member repository

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::team_member::{TeamMember, TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory repository keyed by team member ID
///
/// Data is lost when the process terminates. The map is ordered, so listing
/// yields members sorted by ID.
#[derive(Debug, Default)]
pub struct InMemoryTeamMemberRepository {
    members: RwLock<BTreeMap<TeamMemberId, TeamMember>>,
}

impl InMemoryTeamMemberRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with members
    ///
    /// Later entries win when two members share an ID.
    pub fn with_members(members: Vec<TeamMember>) -> Self {
        let members = members
            .into_iter()
            .map(|member| (member.id(), member))
            .collect();

        Self {
            members: RwLock::new(members),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<TeamMemberId, TeamMember>>, DomainError> {
        self.members
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<TeamMemberId, TeamMember>>, DomainError> {
        self.members
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn get(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        let mut members = self.write()?;

        if members.contains_key(&member.id()) {
            return Err(DomainError::duplicate(format!(
                "Team member with given id '{}' already exists.",
                member.id()
            )));
        }

        members.insert(member.id(), member.clone());
        Ok(member)
    }

    async fn update(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        let mut members = self.write()?;

        match members.get_mut(&member.id()) {
            Some(stored) => {
                *stored = member.clone();
                Ok(member)
            }
            None => Err(DomainError::not_found(format!(
                "Team member with given id '{}' does not exist.",
                member.id()
            ))),
        }
    }

    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError> {
        Ok(self.write()?.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team_member::Role;

    fn create_member(name: &str, role: Role, grade: i32) -> TeamMember {
        TeamMember::create(name, role, grade).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryTeamMemberRepository::new();
        let member = create_member("John", Role::DotNet, 5);

        repo.create(member.clone()).await.unwrap();

        let retrieved = repo.get(&member.id()).await.unwrap();
        assert_eq!(retrieved, Some(member));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryTeamMemberRepository::new();
        assert!(repo.get(&TeamMemberId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = InMemoryTeamMemberRepository::new();
        let member = create_member("John", Role::DotNet, 5);
        let clash = TeamMember::new(member.id(), "Other John", Role::Java, 1).unwrap();

        repo.create(member.clone()).await.unwrap();

        let result = repo.create(clash).await;
        assert!(matches!(result, Err(DomainError::Duplicate { .. })));

        // Original is untouched
        let stored = repo.get(&member.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "John");
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryTeamMemberRepository::new();
        let member = create_member("John", Role::DotNet, 5);
        repo.create(member.clone()).await.unwrap();

        let mut updated = member.clone();
        updated.set_name("Johnny");
        updated.set_grade(6).unwrap();
        repo.update(updated.clone()).await.unwrap();

        let stored = repo.get(&member.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryTeamMemberRepository::new();
        let member = create_member("Ghost", Role::React, 1);

        let result = repo.update(member.clone()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert!(repo.get(&member.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryTeamMemberRepository::new();
        let member = create_member("John", Role::DotNet, 5);
        repo.create(member.clone()).await.unwrap();

        assert!(repo.delete(&member.id()).await.unwrap());
        assert!(!repo.delete(&member.id()).await.unwrap());
        assert!(repo.get(&member.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_sorted_by_id() {
        let members: Vec<TeamMember> = (1..=8)
            .map(|grade| create_member(&format!("Member {}", grade), Role::Java, grade))
            .collect();
        let repo = InMemoryTeamMemberRepository::with_members(members);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 8);
        assert!(listed.windows(2).all(|pair| pair[0].id() < pair[1].id()));
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryTeamMemberRepository::with_members(vec![
            create_member("John", Role::DotNet, 5),
            create_member("Robert", Role::Java, 2),
        ]);

        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
