use serde::{Deserialize, Serialize};

use crate::engine::{CommentaryEvent, MatchConfig, MatchResult, Score, SeededMatch};
use crate::error::{MatchError, Result};
use crate::teams::{find_team, Team};
use crate::SCHEMA_VERSION;

/// Batch simulation request.
///
/// `config` overrides the default (ODI) configuration; `max_overs`, when
/// present, overrides the config's over limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Team id from the catalogue, e.g. "IND".
    pub team1: String,
    pub team2: String,
    #[serde(default)]
    pub max_overs: Option<u32>,
    #[serde(default)]
    pub config: Option<MatchConfig>,
}

impl MatchRequest {
    pub fn new(seed: u64, team1: &str, team2: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            team1: team1.to_string(),
            team2: team2.to_string(),
            max_overs: None,
            config: None,
        }
    }

    fn resolved_config(&self) -> MatchConfig {
        let config = self.config.clone().unwrap_or_default();
        match self.max_overs {
            Some(overs) => config.with_max_overs(overs),
            None => config,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub team: Team,
    pub score: Score,
    pub overs: String,
}

impl InningsSummary {
    fn new(team: &Team, score: Score) -> Self {
        Self { team: team.clone(), score, overs: score.overs() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub max_overs: u32,
    pub team1: InningsSummary,
    pub team2: InningsSummary,
    pub target: u32,
    pub result: MatchResult,
    pub summary: String,
    /// Every event in play order (not capped by the commentary limit).
    pub commentary: Vec<CommentaryEvent>,
}

/// Run a whole match for `request` without any pacing.
pub fn simulate_match(request: &MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchemaVersion(request.schema_version));
    }

    let team1 = find_team(&request.team1)?;
    let team2 = find_team(&request.team2)?;
    let config = request.resolved_config();
    let max_overs = config.max_overs;

    let mut live = SeededMatch::seeded(team1, team2, config, request.seed)?;
    let commentary = live.run_to_completion();
    let state = live.snapshot();

    let result = MatchResult::from_scores(&state.team1_score, &state.team2_score);
    let summary = result.describe(&live.team1().name, &live.team2().name);
    tracing::debug!(seed = request.seed, events = commentary.len(), %summary, "batch match simulated");

    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        max_overs,
        team1: InningsSummary::new(live.team1(), state.team1_score),
        team2: InningsSummary::new(live.team2(), state.team2_score),
        target: state.team1_score.runs + 1,
        result,
        summary,
        commentary,
    })
}

/// JSON in, JSON out. Errors come back as display strings.
pub fn simulate_match_json(request_json: &str) -> std::result::Result<String, String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    let response = simulate_match(&request).map_err(|e| e.to_string())?;
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CommentaryKind;

    #[test]
    fn test_response_matches_final_event() {
        let response = simulate_match(&MatchRequest::new(7, "IND", "AUS")).unwrap();
        assert_eq!(response.team1.team.name, "India");
        assert_eq!(response.team2.team.name, "Australia");
        assert_eq!(response.target, response.team1.score.runs + 1);
        assert_eq!(response.max_overs, 50);

        let last = response.commentary.last().unwrap();
        assert_eq!(last.kind, CommentaryKind::Result);
        assert_eq!(last.text, response.summary);
    }

    #[test]
    fn test_commentary_has_one_innings_break() {
        let response = simulate_match(&MatchRequest::new(11, "NZ", "SA")).unwrap();
        let breaks = response
            .commentary
            .iter()
            .filter(|e| e.kind == CommentaryKind::InningsBreak)
            .count();
        assert_eq!(breaks, 1);
    }

    #[test]
    fn test_max_overs_override() {
        let mut request = MatchRequest::new(5, "ENG", "AUS");
        request.config = Some(MatchConfig::t20());
        request.max_overs = Some(5);
        let response = simulate_match(&request).unwrap();
        assert_eq!(response.max_overs, 5);
        assert!(response.team1.score.balls <= 30);
        assert!(response.team2.score.balls <= 30);
    }

    #[test]
    fn test_team_ids_are_case_insensitive() {
        let response = simulate_match(&MatchRequest::new(1, "ind", "nz")).unwrap();
        assert_eq!(response.team1.team.id, "IND");
        assert_eq!(response.team2.team.id, "NZ");
    }

    #[test]
    fn test_rejects_bad_schema_version() {
        let mut request = MatchRequest::new(1, "IND", "AUS");
        request.schema_version = 2;
        assert!(matches!(simulate_match(&request), Err(MatchError::UnsupportedSchemaVersion(2))));
    }

    #[test]
    fn test_rejects_unknown_and_same_team() {
        assert!(matches!(
            simulate_match(&MatchRequest::new(1, "IND", "PAK")),
            Err(MatchError::UnknownTeam(_))
        ));
        assert!(matches!(
            simulate_match(&MatchRequest::new(1, "AUS", "AUS")),
            Err(MatchError::SameTeam(_))
        ));
    }

    #[test]
    fn test_json_errors_are_strings() {
        let err = simulate_match_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));

        let err = simulate_match_json(r#"{"schema_version":1,"seed":1,"team1":"IND","team2":"XX"}"#)
            .unwrap_err();
        assert_eq!(err, "Unknown team: XX");

        let err =
            simulate_match_json(r#"{"schema_version":1,"seed":1,"team1":"IND","team2":"AUS","max_overs":0}"#)
                .unwrap_err();
        assert!(err.starts_with("Invalid over limit"));
    }
}
