//! Ball outcome generation
//!
//! One call to [`BallGenerator::generate`] bowls one delivery. The category
//! comes from the [`OutcomeTable`] bands; the commentary line is flavour
//! picked uniformly from the category's pool and carries no state.

use serde::{Deserialize, Serialize};

use super::probability::{DeliveryCategory, OutcomeTable};
use super::random::UniformSource;
use super::score::MAX_WICKETS;

/// How a batter got out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dismissal {
    Bowled,
    Caught,
    Lbw,
    CaughtBehind,
    RunOut,
    Stumped,
}

impl Dismissal {
    pub const ALL: [Dismissal; 6] = [
        Dismissal::Bowled,
        Dismissal::Caught,
        Dismissal::Lbw,
        Dismissal::CaughtBehind,
        Dismissal::RunOut,
        Dismissal::Stumped,
    ];

    pub fn commentary(&self) -> &'static str {
        match self {
            Dismissal::Bowled => "BOWLED! The stumps are shattered!",
            Dismissal::Caught => "CAUGHT! Straight to the fielder!",
            Dismissal::Lbw => "LBW! Plumb in front!",
            Dismissal::CaughtBehind => "CAUGHT BEHIND! Edge and gone!",
            Dismissal::RunOut => "RUN OUT! Terrible mix-up!",
            Dismissal::Stumped => "STUMPED! Dancing down the track!",
        }
    }
}

const SIX_LINES: &[&str] = &[
    "SIX! That's massive! Into the crowd!",
    "HUGE SIX! The ball has left the stadium!",
    "SIX! Effortless power! Maximum!",
    "SIX! That's gone all the way!",
];

const FOUR_LINES: &[&str] = &[
    "FOUR! Racing away to the boundary!",
    "FOUR! Perfect timing through the covers!",
    "FOUR! Slashed over the slips!",
    "FOUR! That's a beautiful shot!",
];

const THREE_LINES: &[&str] = &["Three runs! Great running between the wickets!"];

const TWO_LINES: &[&str] = &[
    "Two runs taken. Good placement.",
    "Couple of runs there. Smart cricket.",
    "Two more added. Quick running!",
];

const ONE_LINES: &[&str] = &[
    "Single taken. Rotating the strike.",
    "One run. Keeps the scoreboard ticking.",
    "Quick single there. Good awareness.",
];

const DOT_LINES: &[&str] = &[
    "Dot ball. Good line and length.",
    "No run. Defended solidly.",
    "Played and missed! Close one!",
    "Straight to the fielder. No run.",
    "Left alone outside off. Good judgment.",
];

const WIDE_LINE: &str = "WIDE! Extra run for the batting side!";
const NO_BALL_LINE: &str = "NO BALL! Free hit coming up!";

/// Result of one simulated delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallOutcome {
    /// One of 0, 1, 2, 3, 4 or 6.
    pub runs: u32,
    pub is_wicket: bool,
    pub is_wide: bool,
    pub is_no_ball: bool,
    pub is_boundary: bool,
    pub is_six: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<Dismissal>,
    pub description: String,
}

impl BallOutcome {
    fn plain(runs: u32, description: &str) -> Self {
        Self {
            runs,
            is_wicket: false,
            is_wide: false,
            is_no_ball: false,
            is_boundary: false,
            is_six: false,
            dismissal: None,
            description: description.to_string(),
        }
    }

    pub fn dot(description: &str) -> Self {
        Self::plain(0, description)
    }

    /// Runs taken by running: 1, 2 or 3.
    pub fn running(runs: u32, description: &str) -> Self {
        debug_assert!((1..=3).contains(&runs));
        Self::plain(runs, description)
    }

    pub fn four(description: &str) -> Self {
        Self { is_boundary: true, ..Self::plain(4, description) }
    }

    pub fn six(description: &str) -> Self {
        Self { is_boundary: true, is_six: true, ..Self::plain(6, description) }
    }

    pub fn wicket(dismissal: Dismissal) -> Self {
        Self {
            is_wicket: true,
            dismissal: Some(dismissal),
            ..Self::plain(0, dismissal.commentary())
        }
    }

    pub fn wide() -> Self {
        Self { is_wide: true, ..Self::plain(1, WIDE_LINE) }
    }

    /// The free hit that follows is narrated, not modelled.
    pub fn no_ball() -> Self {
        Self { is_no_ball: true, ..Self::plain(1, NO_BALL_LINE) }
    }

    /// Wides and no-balls are not legal deliveries.
    pub fn is_legal(&self) -> bool {
        !self.is_wide && !self.is_no_ball
    }
}

/// Anything that can bowl the next delivery for the state machine.
pub trait BallGenerator {
    fn generate(&mut self, current_wickets: u8) -> BallOutcome;
}

/// Table-driven generator over an injected uniform source.
#[derive(Debug, Clone)]
pub struct OutcomeGenerator<S: UniformSource> {
    table: OutcomeTable,
    source: S,
}

impl<S: UniformSource> OutcomeGenerator<S> {
    pub fn new(source: S) -> Self {
        Self::with_table(OutcomeTable::default(), source)
    }

    pub fn with_table(table: OutcomeTable, source: S) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &OutcomeTable {
        &self.table
    }

    pub fn into_source(self) -> S {
        self.source
    }

    fn pick_line(&mut self, pool: &'static [&'static str]) -> &'static str {
        if pool.len() == 1 {
            return pool[0];
        }
        pool[self.source.pick_index(pool.len())]
    }
}

impl<S: UniformSource> BallGenerator for OutcomeGenerator<S> {
    fn generate(&mut self, current_wickets: u8) -> BallOutcome {
        let wickets = if current_wickets > MAX_WICKETS {
            tracing::warn!(current_wickets, "wicket count above {MAX_WICKETS}, clamping");
            MAX_WICKETS
        } else {
            current_wickets
        };

        let r = self.source.next_uniform();
        match self.table.classify(r, wickets) {
            DeliveryCategory::Wicket => {
                let dismissal = Dismissal::ALL[self.source.pick_index(Dismissal::ALL.len())];
                BallOutcome::wicket(dismissal)
            }
            DeliveryCategory::Six => BallOutcome::six(self.pick_line(SIX_LINES)),
            DeliveryCategory::Four => BallOutcome::four(self.pick_line(FOUR_LINES)),
            DeliveryCategory::Three => BallOutcome::running(3, self.pick_line(THREE_LINES)),
            DeliveryCategory::Two => BallOutcome::running(2, self.pick_line(TWO_LINES)),
            DeliveryCategory::One => BallOutcome::running(1, self.pick_line(ONE_LINES)),
            DeliveryCategory::Extra => {
                if self.source.next_uniform() > 0.5 {
                    BallOutcome::wide()
                } else {
                    BallOutcome::no_ball()
                }
            }
            DeliveryCategory::Dot => BallOutcome::dot(self.pick_line(DOT_LINES)),
        }
    }
}
