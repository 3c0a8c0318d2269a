//! Team member infrastructure implementations

mod registry;
mod repository;

pub use registry::{default_roster, TeamMemberRegistry};
pub use repository::InMemoryTeamMemberRepository;
