//! Cosmetic observers
//!
//! Presentation-only signals derived from commentary events: the
//! overreaction meter and the crowd mood. None of this feeds back into the
//! match; a UI subscribes whichever observers it wants to display.

use serde::{Deserialize, Serialize};

use super::commentary::CommentaryEvent;
use super::crease::{CreaseSnapshot, CreaseTracker};
use super::match_state::Innings;
use super::random::UniformSource;

/// Receives every commentary event a match emits, in order.
pub trait MatchObserver {
    fn on_event(&mut self, event: &CommentaryEvent);
}

// ============================================
// Overreaction meter
// ============================================

/// Fixed bonuses added to the meter on big moments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionProfile {
    pub wicket_bonus: f64,
    pub six_bonus: f64,
    pub boundary_bonus: f64,
    /// Boundary bonus counts in the first innings only.
    pub boundary_first_innings_only: bool,
    /// Half-width of the per-ball random swing.
    pub jitter: f64,
}

impl ReactionProfile {
    /// Full match page.
    pub fn full() -> Self {
        Self {
            wicket_bonus: 30.0,
            six_bonus: 20.0,
            boundary_bonus: 0.0,
            boundary_first_innings_only: false,
            jitter: 5.0,
        }
    }

    /// Compact live card. First-innings sixes also collect the boundary bonus.
    pub fn compact() -> Self {
        Self {
            wicket_bonus: 25.0,
            six_bonus: 15.0,
            boundary_bonus: 10.0,
            boundary_first_innings_only: true,
            jitter: 5.0,
        }
    }

    fn boundary_bonus_for(&self, innings: Innings) -> f64 {
        if self.boundary_first_innings_only && innings != Innings::First {
            0.0
        } else {
            self.boundary_bonus
        }
    }
}

impl Default for ReactionProfile {
    fn default() -> Self {
        Self::full()
    }
}

/// Bounded 0..=100 hype gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct OverreactionMeter {
    value: f64,
    profile: ReactionProfile,
}

impl Default for OverreactionMeter {
    fn default() -> Self {
        Self::new(50.0, ReactionProfile::full())
    }
}

impl OverreactionMeter {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(initial: f64, profile: ReactionProfile) -> Self {
        Self { value: initial.clamp(Self::MIN, Self::MAX), profile }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rounded percentage for display.
    pub fn percent(&self) -> u8 {
        self.value.round() as u8
    }

    /// Deliveries only; transitions leave the meter alone.
    pub fn observe(&mut self, event: &CommentaryEvent, source: &mut dyn UniformSource) {
        let Some(outcome) = &event.outcome else { return };
        let mut delta = source.next_uniform() * self.profile.jitter * 2.0 - self.profile.jitter;
        if outcome.is_wicket {
            delta += self.profile.wicket_bonus;
        }
        if outcome.is_six {
            delta += self.profile.six_bonus;
        }
        if outcome.is_boundary {
            delta += self.profile.boundary_bonus_for(event.innings);
        }
        self.value = (self.value + delta).clamp(Self::MIN, Self::MAX);
    }
}

// ============================================
// Crowd mood
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrowdMood {
    Furious,
    Devastated,
    CircusMode,
    Celebrating,
    Shocked,
    Bored,
    OnFire,
    DeadInside,
    Confused,
}

impl CrowdMood {
    pub const ALL: [CrowdMood; 9] = [
        CrowdMood::Furious,
        CrowdMood::Devastated,
        CrowdMood::CircusMode,
        CrowdMood::Celebrating,
        CrowdMood::Shocked,
        CrowdMood::Bored,
        CrowdMood::OnFire,
        CrowdMood::DeadInside,
        CrowdMood::Confused,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            CrowdMood::Furious => "😡",
            CrowdMood::Devastated => "😭",
            CrowdMood::CircusMode => "🤡",
            CrowdMood::Celebrating => "🎉",
            CrowdMood::Shocked => "😱",
            CrowdMood::Bored => "🥱",
            CrowdMood::OnFire => "🔥",
            CrowdMood::DeadInside => "💀",
            CrowdMood::Confused => "🤔",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrowdMood::Furious => "Furious",
            CrowdMood::Devastated => "Devastated",
            CrowdMood::CircusMode => "Circus Mode",
            CrowdMood::Celebrating => "Celebrating",
            CrowdMood::Shocked => "Shocked",
            CrowdMood::Bored => "Bored",
            CrowdMood::OnFire => "On Fire",
            CrowdMood::DeadInside => "Dead Inside",
            CrowdMood::Confused => "Confused",
        }
    }
}

const CARD_MOODS: [CrowdMood; 8] = [
    CrowdMood::Furious,
    CrowdMood::Devastated,
    CrowdMood::CircusMode,
    CrowdMood::Celebrating,
    CrowdMood::Shocked,
    CrowdMood::Bored,
    CrowdMood::OnFire,
    CrowdMood::DeadInside,
];

/// Resamples the crowd mood now and then.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdMoodTracker {
    mood: CrowdMood,
    pool: &'static [CrowdMood],
    /// Resample when a draw exceeds this.
    threshold: f64,
    resample_on_wicket: bool,
}

impl Default for CrowdMoodTracker {
    fn default() -> Self {
        Self::full()
    }
}

impl CrowdMoodTracker {
    /// Full match page: all nine moods, wickets always stir the crowd.
    pub fn full() -> Self {
        Self {
            mood: CrowdMood::OnFire,
            pool: &CrowdMood::ALL,
            threshold: 0.6,
            resample_on_wicket: true,
        }
    }

    /// Compact live card: eight moods, changes less often.
    pub fn compact() -> Self {
        Self {
            mood: CrowdMood::OnFire,
            pool: &CARD_MOODS,
            threshold: 0.7,
            resample_on_wicket: false,
        }
    }

    pub fn mood(&self) -> CrowdMood {
        self.mood
    }

    pub fn observe(&mut self, event: &CommentaryEvent, source: &mut dyn UniformSource) {
        let Some(outcome) = &event.outcome else { return };
        let roll = source.next_uniform();
        if roll > self.threshold || (self.resample_on_wicket && outcome.is_wicket) {
            self.mood = self.pool[source.pick_index(self.pool.len())];
        }
    }
}

// ============================================
// Atmosphere: everything a scoreboard shows besides the score
// ============================================

/// Display state for a scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereSnapshot {
    pub overreaction: u8,
    pub crowd_mood: CrowdMood,
    pub crease: CreaseSnapshot,
}

/// Crease, meter and mood observers sharing one uniform source.
///
/// Per delivery the draws happen in that order: incoming batter, meter
/// jitter, mood.
#[derive(Debug, Clone)]
pub struct Atmosphere<S: UniformSource> {
    pub crease: CreaseTracker,
    pub meter: OverreactionMeter,
    pub mood: CrowdMoodTracker,
    source: S,
}

impl<S: UniformSource> Atmosphere<S> {
    /// Full match page defaults.
    pub fn new(source: S) -> Self {
        Self {
            crease: CreaseTracker::default(),
            meter: OverreactionMeter::default(),
            mood: CrowdMoodTracker::full(),
            source,
        }
    }

    /// Compact live card defaults.
    pub fn compact(source: S) -> Self {
        Self {
            crease: CreaseTracker::default(),
            meter: OverreactionMeter::new(67.0, ReactionProfile::compact()),
            mood: CrowdMoodTracker::compact(),
            source,
        }
    }

    pub fn snapshot(&self) -> AtmosphereSnapshot {
        AtmosphereSnapshot {
            overreaction: self.meter.percent(),
            crowd_mood: self.mood.mood(),
            crease: self.crease.snapshot(),
        }
    }
}

impl<S: UniformSource> MatchObserver for Atmosphere<S> {
    fn on_event(&mut self, event: &CommentaryEvent) {
        self.crease.observe(event, &mut self.source);
        self.meter.observe(event, &mut self.source);
        self.mood.observe(event, &mut self.source);
    }
}
