//! Study analytics over the explicit session context.
//!
//! The streak and daily counters reset on day rollover, keyed by the
//! opaque installation id carried in [`SessionState`].

use chrono::NaiveDate;

use crate::SessionState;

/// Advances the session to `today` if the tracked day has changed.
/// The streak grows only when the previously tracked day saw at least
/// one solve; otherwise it breaks. Same-day calls are no-ops.
pub fn roll_day(state: &mut SessionState, today: NaiveDate) {
    if state.day == today {
        return;
    }
    if state.solves_today > 0 {
        state.streak_days += 1;
    } else {
        state.streak_days = 0;
    }
    state.day = today;
    state.solves_today = 0;
}

/// Counts one answered question against `today`.
pub fn record_solve(state: &mut SessionState, today: NaiveDate) {
    roll_day(state, today);
    state.solves_today += 1;
    *state.questions_per_day.entry(today).or_insert(0) += 1;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insights {
    pub streak_days: u32,
    pub total_questions: u32,
    pub avg_per_day: f64,
    pub most_active: Option<(NaiveDate, u32)>,
}

/// Summary over the last 7 tracked days (days with no activity are not
/// tracked and do not dilute the average).
pub fn summarize(state: &SessionState) -> Insights {
    let last7: Vec<(NaiveDate, u32)> = state
        .questions_per_day
        .iter()
        .rev()
        .take(7)
        .map(|(d, n)| (*d, *n))
        .collect();
    let total: u32 = last7.iter().map(|(_, n)| *n).sum();
    let avg = total as f64 / last7.len().max(1) as f64;
    let most_active = last7.iter().copied().max_by_key(|(_, n)| *n);
    Insights {
        streak_days: state.streak_days,
        total_questions: total,
        avg_per_day: avg,
        most_active,
    }
}
