//! # Regex Pattern Providers
//!
//! Fixed pattern strings for values that recur in API response schemas, so
//! schema authors never hand-copy regex literals. Each pattern centralizes
//! its excluded sentinel values; extend an exclusion by OR-ing another
//! literal into the lookahead group.
//!
//! The GUID and datetime patterns use negative lookahead, so they need a
//! lookahead-capable engine (the `jsonschema` crate's `pattern` keyword
//! handles them as-is).

/// Canonical 8-4-4-4-12 hex GUID, rejecting the all-zero GUID.
pub const GUID_PATTERN: &str = "^(?!00000000-0000-0000-0000-000000000000)[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

/// ISO-8601 UTC datetime `YYYY-MM-DDThh:mm:ss[.fraction]Z`, rejecting the
/// zero-date sentinel `0001-01-01T00:00:00Z`.
pub const ISO_DATETIME_PATTERN: &str =
    "^(?!0001-01-01T00:00:00Z)\\d{4}-\\d{2}-\\d{2}T\\d{2}:\\d{2}:\\d{2}(\\.\\d+)?Z$";

/// `http://` or `https://` followed by a dotted host or `localhost`, with
/// optional port and path.
pub const URL_PATTERN: &str =
    "^https?://([A-Za-z0-9-]+(\\.[A-Za-z0-9-]+)+|localhost)(:[0-9]+)?(/\\S*)?$";

/// Pattern for GUID-valued schema fields.
pub fn guid_pattern() -> &'static str {
    GUID_PATTERN
}

/// Pattern for ISO-datetime-valued schema fields.
pub fn iso_datetime_pattern() -> &'static str {
    ISO_DATETIME_PATTERN
}

/// Pattern for URL-valued schema fields.
pub fn url_pattern() -> &'static str {
    URL_PATTERN
}
