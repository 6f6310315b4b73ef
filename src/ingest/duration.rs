//! `Duration` column parsing.
//!
//! The value is computed as `minutes * 60 + seconds`, i.e. a number of
//! seconds, but it is reported and averaged as "minutes" everywhere
//! downstream. Every published average depends on this arithmetic, so it is
//! kept as is. See DESIGN.md before changing the unit.

/// Parses a `"MM:SS"` duration.
///
/// - `None` (empty cell) or text without `':'` → `None`
/// - the first two `':'`-separated fields must be integers (surrounding
///   whitespace allowed); any further fields are ignored
/// - values that do not fit in an `i64` → `None`
pub fn parse_duration(raw: Option<&str>) -> Option<i64> {
    let mut parts = raw?.split(':');
    let minutes: i64 = parts.next()?.trim().parse().ok()?;
    let seconds: i64 = parts.next()?.trim().parse().ok()?;
    minutes.checked_mul(60)?.checked_add(seconds)
}
