//! Live Match State Machine
//!
//! Drives one two-innings match a delivery at a time. The external scheduler
//! calls [`LiveMatch::advance`] once per tick; each call either bowls a
//! delivery, switches innings, declares the result, or does nothing once the
//! match is over.

use serde::{Deserialize, Serialize};

use super::ball::{BallGenerator, BallOutcome, OutcomeGenerator};
use super::commentary::{CommentaryEvent, CommentaryKind, CommentaryLog};
use super::config::MatchConfig;
use super::match_state::{Innings, MatchPhase, MatchResult, MatchState};
use super::random::SeededSource;
use super::score::{format_overs, is_innings_complete, ChaseStatus, Score, MAX_WICKETS};
use crate::error::{MatchError, Result};
use crate::teams::Team;

// ============================================
// StepResult: Per-tick result
// ============================================

/// What a single [`LiveMatch::advance`] call did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// A delivery was bowled.
    Delivery(DeliveryData),
    /// First innings closed; the chase starts next tick.
    InningsBreak(InningsBreakData),
    /// The match was decided on this tick.
    FullTime(FullTimeData),
    /// The match was already over; nothing changed.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryData {
    pub innings: Innings,
    pub outcome: BallOutcome,
    /// Batting side's score after the delivery.
    pub score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsBreakData {
    pub first_innings: Score,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTimeData {
    pub team1_score: Score,
    pub team2_score: Score,
    pub result: MatchResult,
    pub summary: String,
}

// ============================================
// LiveMatch: Main state machine
// ============================================

/// A match in progress.
///
/// Exclusively owns its [`MatchState`]; readers get copies via
/// [`snapshot`](Self::snapshot). `advance` takes `&mut self`, so ticks on one
/// match are serialised by construction.
#[derive(Debug, Clone)]
pub struct LiveMatch<G: BallGenerator> {
    team1: Team,
    team2: Team,
    config: MatchConfig,
    state: MatchState,
    generator: G,
    commentary: CommentaryLog,
    last_event: Option<CommentaryEvent>,
    next_seq: u64,
}

/// A match on a reproducible ChaCha stream.
pub type SeededMatch = LiveMatch<OutcomeGenerator<SeededSource>>;

impl SeededMatch {
    /// Standard generator over the config's outcome table, seeded with `seed`.
    pub fn seeded(team1: Team, team2: Team, config: MatchConfig, seed: u64) -> Result<Self> {
        let generator =
            OutcomeGenerator::with_table(config.outcome_table, SeededSource::seeded(seed));
        Self::new(team1, team2, config, generator)
    }
}

impl<G: BallGenerator> LiveMatch<G> {
    pub fn new(team1: Team, team2: Team, config: MatchConfig, generator: G) -> Result<Self> {
        config.validate()?;
        if team1.id == team2.id {
            return Err(MatchError::SameTeam(team1.id));
        }
        tracing::info!(
            team1 = %team1.name,
            team2 = %team2.name,
            max_overs = config.max_overs,
            "match created"
        );
        let commentary = CommentaryLog::new(config.commentary_limit);
        Ok(Self {
            team1,
            team2,
            config,
            state: MatchState::new(),
            generator,
            commentary,
            last_event: None,
            next_seq: 1,
        })
    }

    /// Resume from an existing state, e.g. a card that opens mid-innings.
    pub fn with_state(mut self, state: MatchState) -> Result<Self> {
        for score in [&state.team1_score, &state.team2_score] {
            if score.wickets > MAX_WICKETS {
                return Err(MatchError::InvalidScore { wickets: score.wickets });
            }
        }
        self.state = state;
        Ok(self)
    }

    pub fn team1(&self) -> &Team {
        &self.team1
    }

    pub fn team2(&self) -> &Team {
        &self.team2
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> MatchState {
        self.state
    }

    /// `InningsBreak` from the switching tick until the chase's first ball.
    pub fn phase(&self) -> MatchPhase {
        match &self.last_event {
            Some(event) if event.kind == CommentaryKind::InningsBreak => MatchPhase::InningsBreak,
            _ => self.state.phase(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    /// Most recent commentary event, if any tick has emitted one.
    pub fn last_event(&self) -> Option<&CommentaryEvent> {
        self.last_event.as_ref()
    }

    pub fn commentary(&self) -> &CommentaryLog {
        &self.commentary
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.state.result()
    }

    /// Result line once the match is over.
    pub fn result_text(&self) -> Option<String> {
        self.result().map(|r| r.describe(&self.team1.name, &self.team2.name))
    }

    /// Chase arithmetic during the second innings.
    pub fn chase(&self) -> Option<ChaseStatus> {
        (self.state.current_innings == Innings::Second && !self.state.is_complete).then(|| {
            ChaseStatus::new(&self.state.team1_score, &self.state.team2_score, self.config.max_overs)
        })
    }

    /// One tick of the match.
    pub fn advance(&mut self) -> StepResult {
        if self.state.is_complete {
            return StepResult::Finished;
        }

        let max_overs = self.config.max_overs;
        match self.state.current_innings {
            Innings::First if is_innings_complete(&self.state.team1_score, max_overs) => {
                return self.close_first_innings();
            }
            Innings::Second
                if self.state.team2_score.runs > self.state.team1_score.runs
                    || is_innings_complete(&self.state.team2_score, max_overs) =>
            {
                return self.finish_match();
            }
            _ => {}
        }

        let innings = self.state.current_innings;
        let outcome = self.generator.generate(self.state.active_score().wickets);
        let score = self.state.active_score_mut();
        score.apply(&outcome);
        let score = *score;

        tracing::debug!(
            innings = innings.number(),
            over = %score.overs(),
            runs = outcome.runs,
            wicket = outcome.is_wicket,
            legal = outcome.is_legal(),
            "delivery"
        );

        self.emit(
            CommentaryKind::from_outcome(&outcome),
            outcome.description.clone(),
            score.overs(),
            Some(outcome.clone()),
        );

        StepResult::Delivery(DeliveryData { innings, outcome, score })
    }

    /// Advance until the match is decided and return every event emitted.
    ///
    /// Terminates as long as the generator keeps producing legal deliveries.
    pub fn run_to_completion(&mut self) -> Vec<CommentaryEvent> {
        let mut events = Vec::new();
        loop {
            match self.advance() {
                StepResult::Finished => break,
                StepResult::FullTime(_) => {
                    events.extend(self.last_event.clone());
                    break;
                }
                _ => events.extend(self.last_event.clone()),
            }
        }
        events
    }

    fn close_first_innings(&mut self) -> StepResult {
        let first_innings = self.state.team1_score;
        let target = first_innings.runs + 1;
        self.state.current_innings = Innings::Second;

        tracing::info!(
            team = %self.team1.name,
            score = %first_innings,
            overs = %first_innings.overs(),
            target,
            "innings break"
        );

        self.emit(
            CommentaryKind::InningsBreak,
            format!("INNINGS BREAK! {} set a target of {} runs 🎯", self.team1.name, target),
            format_overs(first_innings.balls),
            None,
        );
        StepResult::InningsBreak(InningsBreakData { first_innings, target })
    }

    fn finish_match(&mut self) -> StepResult {
        self.state.is_complete = true;
        let team1_score = self.state.team1_score;
        let team2_score = self.state.team2_score;
        let result = MatchResult::from_scores(&team1_score, &team2_score);
        let summary = result.describe(&self.team1.name, &self.team2.name);

        tracing::info!(
            team1 = %team1_score,
            team2 = %team2_score,
            result = %summary,
            "match complete"
        );

        self.emit(CommentaryKind::Result, summary.clone(), format_overs(team2_score.balls), None);
        StepResult::FullTime(FullTimeData { team1_score, team2_score, result, summary })
    }

    fn emit(
        &mut self,
        kind: CommentaryKind,
        text: String,
        over: String,
        outcome: Option<BallOutcome>,
    ) {
        let event = CommentaryEvent {
            seq: self.next_seq,
            kind,
            text,
            over,
            innings: self.state.current_innings,
            outcome,
        };
        self.next_seq += 1;
        self.commentary.push(event.clone());
        self.last_event = Some(event);
    }
}
