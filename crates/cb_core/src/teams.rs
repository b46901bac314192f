//! Team display metadata
//!
//! Teams only feed string interpolation in commentary and result lines;
//! nothing here influences the simulation.

use serde::{Deserialize, Serialize};

use crate::engine::random::UniformSource;
use crate::error::{MatchError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Scoreboard code, e.g. "IND".
    pub short: String,
    pub emoji: String,
}

impl Team {
    pub fn new(id: &str, name: &str, emoji: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            short: id.to_string(),
            emoji: emoji.to_string(),
        }
    }

    /// "🇮🇳 IND"
    pub fn badge(&self) -> String {
        format!("{} {}", self.emoji, self.short)
    }
}

const CATALOGUE: [(&str, &str, &str); 5] = [
    ("IND", "India", "🇮🇳"),
    ("AUS", "Australia", "🇦🇺"),
    ("ENG", "England", "🏴"),
    ("NZ", "New Zealand", "🇳🇿"),
    ("SA", "South Africa", "🇿🇦"),
];

/// Built-in teams in catalogue order.
pub fn all_teams() -> Vec<Team> {
    CATALOGUE.iter().map(|(id, name, emoji)| Team::new(id, name, emoji)).collect()
}

/// Case-insensitive lookup by id.
pub fn find_team(id: &str) -> Result<Team> {
    all_teams()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| MatchError::UnknownTeam(id.to_string()))
}

/// Choose the two sides for a match from the viewer's favourites.
///
/// Favourites are taken in catalogue order. Two or more: the first two.
/// One: it plays a random other team. None: the first two catalogue teams.
pub fn pick_match_teams(favourites: &[String], source: &mut dyn UniformSource) -> (Team, Team) {
    let teams = all_teams();
    let is_favourite = |t: &Team| favourites.iter().any(|f| f.eq_ignore_ascii_case(&t.id));
    let preferred: Vec<&Team> = teams.iter().filter(|t| is_favourite(t)).collect();

    match preferred.as_slice() {
        [first, second, ..] => ((*first).clone(), (*second).clone()),
        [only] => {
            let others: Vec<&Team> = teams.iter().filter(|t| t.id != only.id).collect();
            let opponent = others[source.pick_index(others.len())];
            ((*only).clone(), opponent.clone())
        }
        [] => (teams[0].clone(), teams[1].clone()),
    }
}
