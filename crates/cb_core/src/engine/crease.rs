//! Batter and bowler on display.
//!
//! Only the batter on strike and the current bowler are tracked. Names come
//! from fixed per-innings pools; nothing here affects the score.

use serde::{Deserialize, Serialize};

use super::commentary::{CommentaryEvent, CommentaryKind};
use super::match_state::Innings;
use super::random::UniformSource;
use super::score::format_overs;

const FIRST_INNINGS_OPENERS: (&str, &str) = ("V. Kohli", "P. Cummins");
const SECOND_INNINGS_OPENERS: (&str, &str) = ("D. Warner", "J. Bumrah");

const FIRST_INNINGS_BATTERS: &[&str] = &["R. Sharma", "S. Gill", "K. Rahul", "H. Pandya"];
const SECOND_INNINGS_BATTERS: &[&str] = &["S. Smith", "M. Labuschagne", "G. Maxwell"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterFigures {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
}

impl BatterFigures {
    fn fresh(name: &str) -> Self {
        Self { name: name.to_string(), runs: 0, balls: 0 }
    }

    /// "V. Kohli 34 (41)"
    pub fn line(&self) -> String {
        format!("{} {} ({})", self.name, self.runs, self.balls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerFigures {
    pub name: String,
    pub balls: u32,
    pub wickets: u32,
    pub runs: u32,
}

impl BowlerFigures {
    fn fresh(name: &str) -> Self {
        Self { name: name.to_string(), balls: 0, wickets: 0, runs: 0 }
    }

    /// "P. Cummins 4.2-31-2" (overs-runs-wickets)
    pub fn line(&self) -> String {
        format!("{} {}-{}-{}", self.name, format_overs(self.balls), self.runs, self.wickets)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreaseSnapshot {
    pub batter: BatterFigures,
    pub bowler: BowlerFigures,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreaseTracker {
    batter: BatterFigures,
    bowler: BowlerFigures,
}

impl Default for CreaseTracker {
    fn default() -> Self {
        let (batter, bowler) = FIRST_INNINGS_OPENERS;
        Self { batter: BatterFigures::fresh(batter), bowler: BowlerFigures::fresh(bowler) }
    }
}

impl CreaseTracker {
    pub fn batter(&self) -> &BatterFigures {
        &self.batter
    }

    pub fn bowler(&self) -> &BowlerFigures {
        &self.bowler
    }

    pub fn snapshot(&self) -> CreaseSnapshot {
        CreaseSnapshot { batter: self.batter.clone(), bowler: self.bowler.clone() }
    }

    pub fn observe(&mut self, event: &CommentaryEvent, source: &mut dyn UniformSource) {
        if event.kind == CommentaryKind::InningsBreak {
            let (batter, bowler) = SECOND_INNINGS_OPENERS;
            self.batter = BatterFigures::fresh(batter);
            self.bowler = BowlerFigures::fresh(bowler);
            return;
        }
        let Some(outcome) = &event.outcome else { return };
        let legal = outcome.is_legal();

        if outcome.is_wicket {
            let pool = match event.innings {
                Innings::First => FIRST_INNINGS_BATTERS,
                Innings::Second => SECOND_INNINGS_BATTERS,
            };
            self.batter = BatterFigures::fresh(pool[source.pick_index(pool.len())]);
        } else if legal {
            // Extras go to the bowler, not the bat.
            self.batter.runs += outcome.runs;
            self.batter.balls += 1;
        }

        if legal {
            self.bowler.balls += 1;
        }
        if outcome.is_wicket {
            self.bowler.wickets += 1;
        }
        self.bowler.runs += outcome.runs;
    }
}
