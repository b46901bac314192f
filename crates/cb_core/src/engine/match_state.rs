//! Two-innings match state, completion predicates and result wording.

use serde::{Deserialize, Serialize};

use super::score::{is_innings_complete, Score, MAX_WICKETS};

/// Which side is batting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Innings {
    #[default]
    First,
    Second,
}

impl Innings {
    pub fn number(&self) -> u8 {
        match self {
            Innings::First => 1,
            Innings::Second => 2,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    FirstInnings,
    /// Between the innings-switch tick and the first delivery of the chase.
    /// Only a [`LiveMatch`](super::live_match::LiveMatch) reports it; a bare
    /// state cannot tell.
    InningsBreak,
    SecondInnings,
    Complete,
}

/// Both innings plus control fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub team1_score: Score,
    pub team2_score: Score,
    pub current_innings: Innings,
    pub is_complete: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start partway through the first innings.
    pub fn from_first_innings(team1_score: Score) -> Self {
        Self { team1_score, ..Self::default() }
    }

    /// Runs the chasing side needs; only meaningful once the first innings ended.
    pub fn target(&self) -> Option<u32> {
        match self.current_innings {
            Innings::First => None,
            Innings::Second => Some(self.team1_score.runs + 1),
        }
    }

    pub fn active_score(&self) -> &Score {
        match self.current_innings {
            Innings::First => &self.team1_score,
            Innings::Second => &self.team2_score,
        }
    }

    pub(crate) fn active_score_mut(&mut self) -> &mut Score {
        match self.current_innings {
            Innings::First => &mut self.team1_score,
            Innings::Second => &mut self.team2_score,
        }
    }

    /// Phase implied by the state alone; never `InningsBreak`.
    pub fn phase(&self) -> MatchPhase {
        if self.is_complete {
            return MatchPhase::Complete;
        }
        match self.current_innings {
            Innings::First => MatchPhase::FirstInnings,
            Innings::Second => MatchPhase::SecondInnings,
        }
    }

    /// Final result, once the match is over.
    pub fn result(&self) -> Option<MatchResult> {
        self.is_complete
            .then(|| MatchResult::from_scores(&self.team1_score, &self.team2_score))
    }
}

/// Whether the match should end (second innings) or switch innings (first).
pub fn is_match_complete(
    team1_score: &Score,
    team2_score: &Score,
    current_innings: Innings,
    max_overs: u32,
) -> bool {
    match current_innings {
        Innings::First => is_innings_complete(team1_score, max_overs),
        Innings::Second => {
            team2_score.runs > team1_score.runs || is_innings_complete(team2_score, max_overs)
        }
    }
}

/// Decided result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// The chasing side passed the target.
    SecondTeamWon { wickets_remaining: u8 },
    /// The side batting first defended its total.
    FirstTeamWon { margin: u32 },
    Tie,
}

impl MatchResult {
    pub fn from_scores(team1_score: &Score, team2_score: &Score) -> Self {
        if team2_score.runs > team1_score.runs {
            MatchResult::SecondTeamWon {
                wickets_remaining: MAX_WICKETS.saturating_sub(team2_score.wickets),
            }
        } else if team1_score.runs > team2_score.runs {
            MatchResult::FirstTeamWon { margin: team1_score.runs - team2_score.runs }
        } else {
            MatchResult::Tie
        }
    }

    pub fn describe(&self, team1_name: &str, team2_name: &str) -> String {
        match *self {
            MatchResult::SecondTeamWon { wickets_remaining } => {
                format!(
                    "{} wins by {} {}!",
                    team2_name,
                    wickets_remaining,
                    plural(wickets_remaining as u32, "wicket")
                )
            }
            MatchResult::FirstTeamWon { margin } => {
                format!("{} wins by {} {}!", team1_name, margin, plural(margin, "run"))
            }
            MatchResult::Tie => "Match tied! Absolute chaos!".to_string(),
        }
    }
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Result line for two final scores, e.g. "India wins by 3 wickets!".
pub fn get_match_result(
    team1_name: &str,
    team2_name: &str,
    team1_score: &Score,
    team2_score: &Score,
) -> String {
    MatchResult::from_scores(team1_score, team2_score).describe(team1_name, team2_name)
}
