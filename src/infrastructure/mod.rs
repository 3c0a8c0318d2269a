//! Infrastructure layer - Registry storage, logging and correlation

pub mod correlation;
pub mod logging;
pub mod team_member;
