//! Post-fetch shaping for the community events feed.

use chrono::DateTime;

use crate::catalog::model::CommunityEvent;

/// Upper bound on the events surfaced to the feed.
pub const MAX_UPCOMING: usize = 10;

/// Keep events dated today or later, soonest first, capped at
/// [`MAX_UPCOMING`]. Dates are ISO `YYYY-MM-DD` strings, so lexical order is
/// chronological order; undated entries are dropped.
pub fn upcoming(mut events: Vec<CommunityEvent>, now_ms: i64) -> Vec<CommunityEvent> {
    let today = match DateTime::from_timestamp_millis(now_ms) {
        Some(ts) => ts.date_naive().to_string(),
        None => return Vec::new(),
    };

    events.retain(|event| event.date.as_str() >= today.as_str());
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events.truncate(MAX_UPCOMING);
    events
}
