//! Commentary events and the bounded, newest-first commentary history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::ball::BallOutcome;
use super::match_state::Innings;

/// Default number of entries kept in a [`CommentaryLog`].
pub const DEFAULT_COMMENTARY_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentaryKind {
    Normal,
    Four,
    Six,
    Wicket,
    Wide,
    NoBall,
    InningsBreak,
    Result,
}

impl CommentaryKind {
    /// Wicket beats six beats four beats wide beats no-ball.
    pub fn from_outcome(outcome: &BallOutcome) -> Self {
        if outcome.is_wicket {
            CommentaryKind::Wicket
        } else if outcome.is_six {
            CommentaryKind::Six
        } else if outcome.is_boundary {
            CommentaryKind::Four
        } else if outcome.is_wide {
            CommentaryKind::Wide
        } else if outcome.is_no_ball {
            CommentaryKind::NoBall
        } else {
            CommentaryKind::Normal
        }
    }

    /// Tag the UI styles entries by. Transitions render as normal lines.
    pub fn display_tag(&self) -> &'static str {
        match self {
            CommentaryKind::Four => "four",
            CommentaryKind::Six => "six",
            CommentaryKind::Wicket => "wicket",
            CommentaryKind::Wide => "wide",
            CommentaryKind::NoBall => "noball",
            CommentaryKind::Normal | CommentaryKind::InningsBreak | CommentaryKind::Result => {
                "normal"
            }
        }
    }
}

/// One line of commentary tied to a delivery or an innings/match transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryEvent {
    /// Monotonic per match, starting at 1.
    pub seq: u64,
    pub kind: CommentaryKind,
    pub text: String,
    /// Overs label at the time of the event, e.g. `"12.3"`.
    pub over: String,
    pub innings: Innings,
    /// Present for delivery events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<BallOutcome>,
}

impl CommentaryEvent {
    pub fn is_delivery(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Bounded commentary history, newest entry first.
#[derive(Debug, Clone)]
pub struct CommentaryLog {
    entries: VecDeque<CommentaryEvent>,
    limit: usize,
}

impl Default for CommentaryLog {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENTARY_LIMIT)
    }
}

impl CommentaryLog {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self { entries: VecDeque::with_capacity(limit), limit }
    }

    pub fn push(&mut self, event: CommentaryEvent) {
        self.entries.push_front(event);
        self.entries.truncate(self.limit);
    }

    pub fn latest(&self) -> Option<&CommentaryEvent> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CommentaryEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
