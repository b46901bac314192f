//! Innings score bookkeeping and over arithmetic.

use serde::{Deserialize, Serialize};

use super::ball::BallOutcome;

pub const MAX_WICKETS: u8 = 10;
pub const BALLS_PER_OVER: u32 = 6;
/// One-day international length.
pub const DEFAULT_MAX_OVERS: u32 = 50;

/// One team's batting innings so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub runs: u32,
    pub wickets: u8,
    /// Legal deliveries faced; wides and no-balls are not counted.
    pub balls: u32,
}

impl Score {
    pub fn new(runs: u32, wickets: u8, balls: u32) -> Self {
        Self { runs, wickets, balls }
    }

    /// Apply one delivery to this innings.
    pub fn apply(&mut self, outcome: &BallOutcome) {
        self.runs += outcome.runs;
        if outcome.is_wicket {
            self.wickets = self.wickets.saturating_add(1).min(MAX_WICKETS);
        }
        if outcome.is_legal() {
            self.balls += 1;
        }
    }

    /// Overs bowled, e.g. `"25.4"`.
    pub fn overs(&self) -> String {
        format_overs(self.balls)
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= MAX_WICKETS
    }

    /// Runs per six legal balls; zero before the first legal ball.
    pub fn run_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f64 / self.balls as f64 * BALLS_PER_OVER as f64
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.runs, self.wickets)
    }
}

/// Ball count to overs notation: `154` → `"25.4"`.
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Position of the latest ball within its over, 1..=6.
pub fn current_ball_in_over(balls: u32) -> u32 {
    match balls % BALLS_PER_OVER {
        0 => BALLS_PER_OVER,
        n => n,
    }
}

pub fn is_over_complete(balls: u32) -> bool {
    balls > 0 && balls % BALLS_PER_OVER == 0
}

/// Legal deliveries in an innings of `max_overs`, saturating at `u32::MAX`.
pub fn max_balls(max_overs: u32) -> u32 {
    max_overs.saturating_mul(BALLS_PER_OVER)
}

/// An innings ends at ten wickets or when the over allocation is used up.
pub fn is_innings_complete(score: &Score, max_overs: u32) -> bool {
    score.wickets >= MAX_WICKETS || score.balls >= max_balls(max_overs)
}

pub fn balls_remaining(score: &Score, max_overs: u32) -> u32 {
    max_balls(max_overs).saturating_sub(score.balls)
}

/// Runs the chasing side still needs to pass the first innings total.
pub fn runs_needed(first_innings: &Score, chase: &Score) -> u32 {
    first_innings.runs.saturating_add(1).saturating_sub(chase.runs)
}

/// Runs per over required to win; `None` once no balls remain.
pub fn required_run_rate(first_innings: &Score, chase: &Score, max_overs: u32) -> Option<f64> {
    let remaining = balls_remaining(chase, max_overs);
    if remaining == 0 {
        return None;
    }
    Some(runs_needed(first_innings, chase) as f64 / remaining as f64 * BALLS_PER_OVER as f64)
}

/// How the chase looks from the required rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaseTrend {
    /// Required rate below 6 an over.
    Comfortable,
    Neutral,
    /// Required rate above 10 an over.
    Struggling,
}

impl ChaseTrend {
    pub fn from_required_rate(rate: Option<f64>) -> Self {
        match rate {
            Some(r) if r < 6.0 => ChaseTrend::Comfortable,
            Some(r) if r > 10.0 => ChaseTrend::Struggling,
            Some(_) => ChaseTrend::Neutral,
            // Out of balls with runs still needed.
            None => ChaseTrend::Struggling,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            ChaseTrend::Comfortable => "↗",
            ChaseTrend::Neutral => "→",
            ChaseTrend::Struggling => "↘",
        }
    }
}

/// Snapshot of a run chase for scoreboard display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseStatus {
    pub target: u32,
    pub runs_needed: u32,
    pub balls_remaining: u32,
    pub required_run_rate: Option<f64>,
    pub trend: ChaseTrend,
}

impl ChaseStatus {
    pub fn new(first_innings: &Score, chase: &Score, max_overs: u32) -> Self {
        let required_run_rate = required_run_rate(first_innings, chase, max_overs);
        Self {
            target: first_innings.runs + 1,
            runs_needed: runs_needed(first_innings, chase),
            balls_remaining: balls_remaining(chase, max_overs),
            required_run_rate,
            trend: ChaseTrend::from_required_rate(required_run_rate),
        }
    }

    /// "Need 42 runs from 30 balls".
    pub fn describe(&self) -> String {
        format!("Need {} runs from {} balls", self.runs_needed, self.balls_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ball::Dismissal;

    #[test]
    fn test_format_overs() {
        assert_eq!(format_overs(0), "0.0");
        assert_eq!(format_overs(5), "0.5");
        assert_eq!(format_overs(6), "1.0");
        assert_eq!(format_overs(154), "25.4");
        assert_eq!(format_overs(300), "50.0");
    }

    #[test]
    fn test_current_ball_in_over() {
        assert_eq!(current_ball_in_over(0), 6);
        assert_eq!(current_ball_in_over(1), 1);
        assert_eq!(current_ball_in_over(6), 6);
        assert_eq!(current_ball_in_over(154), 4);
    }

    #[test]
    fn test_is_over_complete() {
        assert!(!is_over_complete(0));
        assert!(!is_over_complete(5));
        assert!(is_over_complete(6));
        assert!(is_over_complete(300));
    }

    #[test]
    fn test_innings_complete_on_wickets_or_overs() {
        assert!(!is_innings_complete(&Score::new(156, 3, 154), DEFAULT_MAX_OVERS));
        assert!(is_innings_complete(&Score::new(120, 10, 180), DEFAULT_MAX_OVERS));
        assert!(is_innings_complete(&Score::new(280, 6, 300), DEFAULT_MAX_OVERS));
        assert!(is_innings_complete(&Score::new(160, 4, 120), 20));
        assert!(!is_innings_complete(&Score::new(160, 4, 119), 20));
    }

    #[test]
    fn test_huge_over_limits_saturate() {
        let score = Score::new(100, 2, 60);
        assert_eq!(max_balls(u32::MAX), u32::MAX);
        assert!(!is_innings_complete(&score, u32::MAX));
        assert_eq!(balls_remaining(&score, u32::MAX), u32::MAX - 60);
        assert!(required_run_rate(&Score::new(250, 10, 300), &score, u32::MAX).is_some());
        assert_eq!(runs_needed(&Score::new(u32::MAX, 10, 300), &score), u32::MAX - 100);
    }

    #[test]
    fn test_apply_wide_does_not_consume_ball() {
        let mut score = Score::new(10, 1, 12);
        score.apply(&BallOutcome::wide());
        assert_eq!(score, Score::new(11, 1, 12));
    }

    #[test]
    fn test_apply_wicket_is_clamped() {
        let mut score = Score::new(200, 10, 250);
        let outcome = BallOutcome::wicket(Dismissal::Bowled);
        score.apply(&outcome);
        assert_eq!(score.wickets, MAX_WICKETS);
        assert_eq!(score.balls, 251);
    }

    #[test]
    fn test_display_and_run_rate() {
        let score = Score::new(156, 3, 154);
        assert_eq!(score.to_string(), "156/3");
        assert_eq!(score.overs(), "25.4");
        assert_eq!(Score::default().run_rate(), 0.0);
        assert!((Score::new(60, 0, 60).run_rate() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_chase_status() {
        let first = Score::new(250, 10, 300);
        let chase = Score::new(200, 4, 270);
        let status = ChaseStatus::new(&first, &chase, DEFAULT_MAX_OVERS);
        assert_eq!(status.target, 251);
        assert_eq!(status.runs_needed, 51);
        assert_eq!(status.balls_remaining, 30);
        assert_eq!(status.trend, ChaseTrend::Struggling);
        assert_eq!(status.describe(), "Need 51 runs from 30 balls");
    }

    #[test]
    fn test_chase_trend_thresholds() {
        assert_eq!(ChaseTrend::from_required_rate(Some(5.9)), ChaseTrend::Comfortable);
        assert_eq!(ChaseTrend::from_required_rate(Some(6.0)), ChaseTrend::Neutral);
        assert_eq!(ChaseTrend::from_required_rate(Some(10.0)), ChaseTrend::Neutral);
        assert_eq!(ChaseTrend::from_required_rate(Some(10.5)), ChaseTrend::Struggling);
        assert_eq!(ChaseTrend::from_required_rate(None), ChaseTrend::Struggling);
    }

    #[test]
    fn test_runs_needed_saturates() {
        let first = Score::new(100, 10, 200);
        assert_eq!(runs_needed(&first, &Score::new(120, 2, 100)), 0);
        assert_eq!(required_run_rate(&first, &Score::new(50, 2, 300), DEFAULT_MAX_OVERS), None);
    }
}
