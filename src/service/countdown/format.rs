//! Time-remaining formatting.

use chrono::TimeDelta;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Formats a time delta as a compact countdown string like `10d 4h 32m`.
///
/// Negative deltas render as `0m`. Sub-second precision is truncated, minutes are
/// always present, hours appear whenever there are hours or days and days only when
/// there is at least one.
///
/// # Arguments
/// - `delta` - Signed time left until impact
///
/// # Returns
/// - `String` - e.g. `10d 4h 32m`, `1d 0h 5m`, `2h 0m` or `45m`
pub fn format_remaining(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);

    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", minutes));

    parts.join(" ")
}
