//! Mute durations: parsing `1d2h30m`-style input and rendering it back.

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

static DURATION_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([dhms])").expect("valid duration regex"));

/// Parses a duration made of `<digits><unit>` parts, units `d`, `h`, `m`, `s`.
///
/// Parts are summed, so `1h30m` and `30m1h` are equal. Returns `None` when the
/// input contains anything else or adds up to zero.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let mut total = Duration::zero();
    let mut consumed = 0;

    for caps in DURATION_PART.captures_iter(&input) {
        let whole = caps.get(0)?;
        if whole.start() != consumed {
            return None;
        }
        consumed = whole.end();

        let amount: i64 = caps[1].parse().ok()?;
        let part = match &caps[2] {
            "d" => Duration::try_days(amount)?,
            "h" => Duration::try_hours(amount)?,
            "m" => Duration::try_minutes(amount)?,
            "s" => Duration::try_seconds(amount)?,
            _ => return None,
        };
        total = total.checked_add(&part)?;
    }

    if consumed != input.len() || total <= Duration::zero() {
        return None;
    }

    Some(total)
}

/// Renders a duration as e.g. "1 day, 2 hours and 30 minutes".
pub fn readable_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let units = [
        (total / 86_400, "day"),
        (total % 86_400 / 3_600, "hour"),
        (total % 3_600 / 60, "minute"),
        (total % 60, "second"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| {
            if *amount == 1 {
                format!("{} {}", amount, unit)
            } else {
                format!("{} {}s", amount, unit)
            }
        })
        .collect();

    match parts.as_slice() {
        [] => "0 seconds".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
