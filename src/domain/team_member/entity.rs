//! Team member entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{parse_role, validate_grade, TeamMemberValidationError};

/// Team member identifier
///
/// Records created through deserialization or [`TeamMemberId::new`] never
/// carry the nil UUID. Ids parsed from a request path keep the literal value,
/// so lookups of the nil id simply miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Uuid", into = "Uuid")]
pub struct TeamMemberId(Uuid);

impl TeamMemberId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID for a new record, generating a fresh one when it is nil
    pub fn from_uuid(id: Uuid) -> Self {
        if id.is_nil() { Self::new() } else { Self(id) }
    }

    /// Wrap a UUID that addresses an existing record, keeping nil as is
    pub fn existing(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from its textual form
    pub fn parse(value: &str) -> Result<Self, TeamMemberValidationError> {
        Uuid::parse_str(value)
            .map(Self::existing)
            .map_err(|_| TeamMemberValidationError::InvalidId(value.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TeamMemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TeamMemberId {
    fn from(id: Uuid) -> Self {
        Self::from_uuid(id)
    }
}

impl From<TeamMemberId> for Uuid {
    fn from(id: TeamMemberId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Skill category of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    DotNet,
    Java,
    Angular,
    React,
    DevOps,
}

impl Role {
    /// Every defined role, in declaration order
    pub const ALL: [Role; 5] = [
        Role::DotNet,
        Role::Java,
        Role::Angular,
        Role::React,
        Role::DevOps,
    ];

    /// Roles served by the backend endpoint
    pub const BACKEND: [Role; 2] = [Role::Java, Role::DotNet];

    /// Roles served by the frontend endpoint
    pub const FRONTEND: [Role; 2] = [Role::Angular, Role::React];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DotNet => "dotnet",
            Self::Java => "java",
            Self::Angular => "angular",
            Self::React => "react",
            Self::DevOps => "devops",
        }
    }

    pub fn is_backend(&self) -> bool {
        Self::BACKEND.contains(self)
    }

    pub fn is_frontend(&self) -> bool {
        Self::FRONTEND.contains(self)
    }
}

impl TryFrom<String> for Role {
    type Error = TeamMemberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_role(&value)
    }
}

impl std::str::FromStr for Role {
    type Err = TeamMemberValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_role(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire shape of a team member before validation
#[derive(Debug, Clone, Deserialize)]
struct TeamMemberPayload {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    role: Role,
    grade: i32,
}

/// Team member entity
///
/// Construction and every mutator validate eagerly, so a value of this type
/// always holds a positive grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamMemberPayload")]
pub struct TeamMember {
    id: TeamMemberId,
    name: String,
    role: Role,
    grade: i32,
}

impl TeamMember {
    /// Create a new team member
    pub fn new(
        id: TeamMemberId,
        name: impl Into<String>,
        role: Role,
        grade: i32,
    ) -> Result<Self, TeamMemberValidationError> {
        validate_grade(grade)?;

        Ok(Self {
            id,
            name: name.into(),
            role,
            grade,
        })
    }

    /// Create a team member with a freshly generated id
    pub fn create(
        name: impl Into<String>,
        role: Role,
        grade: i32,
    ) -> Result<Self, TeamMemberValidationError> {
        Self::new(TeamMemberId::new(), name, role, grade)
    }

    // Getters

    pub fn id(&self) -> TeamMemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn grade(&self) -> i32 {
        self.grade
    }

    // Mutators

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Update the grade, rejecting zero and negative values
    pub fn set_grade(&mut self, grade: i32) -> Result<(), TeamMemberValidationError> {
        validate_grade(grade)?;
        self.grade = grade;
        Ok(())
    }
}

impl TryFrom<TeamMemberPayload> for TeamMember {
    type Error = TeamMemberValidationError;

    fn try_from(payload: TeamMemberPayload) -> Result<Self, Self::Error> {
        let id = payload
            .id
            .map(TeamMemberId::from_uuid)
            .unwrap_or_default();

        Self::new(id, payload.name, payload.role, payload.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_member_id_never_nil() {
        let id = TeamMemberId::from_uuid(Uuid::nil());
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_team_member_id_keeps_supplied_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(*TeamMemberId::from_uuid(uuid).as_uuid(), uuid);
    }

    #[test]
    fn test_team_member_id_parse() {
        let uuid = Uuid::new_v4();
        let id = TeamMemberId::parse(&uuid.to_string()).unwrap();
        assert_eq!(*id.as_uuid(), uuid);

        let nil = TeamMemberId::parse("00000000-0000-0000-0000-000000000000").unwrap();
        assert!(nil.as_uuid().is_nil());

        assert_eq!(
            TeamMemberId::parse("not-a-uuid"),
            Err(TeamMemberValidationError::InvalidId("not-a-uuid".to_string()))
        );
    }

    #[test]
    fn test_role_groups() {
        assert!(Role::Java.is_backend());
        assert!(Role::DotNet.is_backend());
        assert!(Role::Angular.is_frontend());
        assert!(Role::React.is_frontend());
        assert!(!Role::DevOps.is_backend());
        assert!(!Role::DevOps.is_frontend());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::DotNet).unwrap(), "\"dotnet\"");
        assert_eq!(serde_json::to_string(&Role::DevOps).unwrap(), "\"devops\"");

        let role: Role = serde_json::from_str("\"React\"").unwrap();
        assert_eq!(role, Role::React);

        assert!(serde_json::from_str::<Role>("\"Cobol\"").is_err());
    }

    #[test]
    fn test_team_member_creation() {
        let member = TeamMember::create("John", Role::DotNet, 5).unwrap();

        assert_eq!(member.name(), "John");
        assert_eq!(member.role(), Role::DotNet);
        assert_eq!(member.grade(), 5);
    }

    #[test]
    fn test_team_member_grade_boundary() {
        assert!(TeamMember::create("John", Role::Java, 1).is_ok());
        assert_eq!(
            TeamMember::create("John", Role::Java, 0),
            Err(TeamMemberValidationError::NonPositiveGrade(0))
        );
        assert!(TeamMember::create("John", Role::Java, -1).is_err());
    }

    #[test]
    fn test_team_member_set_grade() {
        let mut member = TeamMember::create("John", Role::DotNet, 5).unwrap();

        member.set_grade(7).unwrap();
        assert_eq!(member.grade(), 7);

        assert!(member.set_grade(0).is_err());
        assert_eq!(member.grade(), 7);
    }

    #[test]
    fn test_team_member_serialization() {
        let member = TeamMember::create("Robert", Role::Java, 2).unwrap();
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(json["id"], member.id().to_string());
        assert_eq!(json["name"], "Robert");
        assert_eq!(json["role"], "java");
        assert_eq!(json["grade"], 2);
    }

    #[test]
    fn test_team_member_deserialization_ignores_unknown_fields() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{}","name":"Alex","role":"angular","grade":5,"team":"web"}}"#,
            id
        );

        let member: TeamMember = serde_json::from_str(&json).unwrap();
        assert_eq!(*member.id().as_uuid(), id);
        assert_eq!(member.role(), Role::Angular);
    }

    #[test]
    fn test_team_member_deserialization_generates_missing_id() {
        let member: TeamMember =
            serde_json::from_str(r#"{"name":"Jack","role":"react","grade":3}"#).unwrap();
        assert!(!member.id().as_uuid().is_nil());

        let nil: TeamMember = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","name":"Jack","role":"react","grade":3}"#,
        )
        .unwrap();
        assert!(!nil.id().as_uuid().is_nil());
    }

    #[test]
    fn test_team_member_deserialization_rejects_invalid() {
        assert!(serde_json::from_str::<TeamMember>(r#"{"name":"Tom","role":"angular","grade":0}"#).is_err());
        assert!(serde_json::from_str::<TeamMember>(r#"{"name":"Tom","role":"cobol","grade":2}"#).is_err());
        assert!(serde_json::from_str::<TeamMember>(r#"{"role":"angular","grade":2}"#).is_err());
        assert!(serde_json::from_str::<TeamMember>(r#"{"name":null,"role":"angular","grade":2}"#).is_err());
    }
}
