//! Event date matching.

use chrono::NaiveDate;

/// Exact calendar-day equality, both sides already normalized to UTC
/// calendar days. No grace window, no near-date matching.
pub fn is_event_today(ex_dividend_date: NaiveDate, today: NaiveDate) -> bool {
    ex_dividend_date == today
}
