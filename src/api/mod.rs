//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod info;
pub mod middleware;
pub mod roles;
pub mod router;
pub mod state;
pub mod team_members;
pub mod types;

pub use router::{create_branched_router, create_main_router, create_router};
pub use state::AppState;
