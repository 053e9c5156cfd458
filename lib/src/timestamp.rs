//! Vendor timestamp decoding.
//!
//! Chromium-family browsers store times as the number of microseconds since
//! 1601-01-01 00:00:00 UTC, written as a decimal string.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Two centuries of microseconds. Its nanosecond equivalent still fits in an `i64`.
pub const CHUNK_MICROS: i64 = 200 * 365 * 24 * 60 * 60 * 1_000_000;

/// 1601-01-01T00:00:00Z
pub fn vendor_epoch() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1601, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Convert a vendor microsecond count into an instant.
///
/// Whole chunks are added one at a time so no intermediate nanosecond value
/// overflows. Returns `None` only if the instant falls outside chrono's range.
pub fn decode(micros: i64) -> Option<DateTime<Utc>> {
    let chunk = TimeDelta::nanoseconds(CHUNK_MICROS * 1000);
    let mut ts = vendor_epoch();
    let mut rest = micros;

    while rest >= CHUNK_MICROS {
        ts = ts.checked_add_signed(chunk)?;
        rest -= CHUNK_MICROS;
    }
    while rest <= -CHUNK_MICROS {
        ts = ts.checked_sub_signed(chunk)?;
        rest += CHUNK_MICROS;
    }

    ts.checked_add_signed(TimeDelta::nanoseconds(rest * 1000))
}

/// Inverse of [`decode`]. Sub-microsecond precision is truncated.
pub fn encode(ts: DateTime<Utc>) -> Option<i64> {
    let delta = ts.signed_duration_since(vendor_epoch());
    let secs = delta.num_seconds();
    let micros = i64::from(delta.subsec_nanos()) / 1000;
    secs.checked_mul(1_000_000)?.checked_add(micros)
}
