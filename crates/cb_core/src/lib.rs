//! # cb_core - Cricket Match Simulation Core
//!
//! Ball-by-ball cricket simulation for the cricbugs match pages.
//!
//! ## Features
//! - Weighted ball outcome generator over an injected uniform source
//! - Two-innings match state machine driven one tick at a time
//! - Deterministic with a seeded source (same seed = same match)
//! - Cosmetic observers (crease, crowd mood, overreaction meter)
//! - JSON API for batch simulation

pub mod api;
pub mod engine;
pub mod error;
pub mod teams;

pub use api::{simulate_match, simulate_match_json, MatchRequest, MatchResponse};
pub use engine::{
    BallGenerator, BallOutcome, CommentaryEvent, CommentaryKind, LiveMatch, MatchConfig,
    MatchResult, MatchState, MatchTicker, OutcomeGenerator, Score, SeededMatch, StepResult,
    UniformSource,
};
pub use error::{MatchError, Result};
pub use teams::{all_teams, find_team, pick_match_teams, Team};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
