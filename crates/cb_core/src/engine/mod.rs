pub mod ball;
pub mod commentary;
pub mod config;
pub mod crease;
pub mod live_match;
pub mod match_state;
pub mod observers;
pub mod probability;
pub mod random;
pub mod score;
pub mod ticker;

pub use ball::{BallGenerator, BallOutcome, Dismissal, OutcomeGenerator};
pub use commentary::{CommentaryEvent, CommentaryKind, CommentaryLog};
pub use config::MatchConfig;
pub use crease::{BatterFigures, BowlerFigures, CreaseSnapshot, CreaseTracker};
pub use live_match::{
    DeliveryData, FullTimeData, InningsBreakData, LiveMatch, SeededMatch, StepResult,
};
pub use match_state::{get_match_result, is_match_complete, Innings, MatchPhase, MatchResult, MatchState};
pub use observers::{
    Atmosphere, AtmosphereSnapshot, CrowdMood, CrowdMoodTracker, MatchObserver,
    OverreactionMeter, ReactionProfile,
};
pub use probability::{DeliveryCategory, OutcomeTable};
pub use random::{EntropySource, RngSource, ScriptedSource, SeededSource, UniformSource};
pub use score::{
    balls_remaining, current_ball_in_over, format_overs, is_innings_complete, is_over_complete,
    max_balls, required_run_rate, runs_needed, ChaseStatus, ChaseTrend, Score, BALLS_PER_OVER,
    DEFAULT_MAX_OVERS, MAX_WICKETS,
};
pub use ticker::{MatchTicker, TickUpdate};
