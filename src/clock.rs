use time::{OffsetDateTime, macros::format_description};

/// Unix epoch milliseconds, the liveness stamp stored per participant.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Formats an epoch-millis stamp as the `HH:mm:ss` string messages carry.
pub fn wall_clock(millis: i64) -> String {
    let stamp = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    stamp
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}
