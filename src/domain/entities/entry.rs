//! Entry entity representing a published content entry.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Input data for creating an entry in the content store.
///
/// Built by the publisher from a [`super::SourceRecord`] once its category and
/// author have been resolved to remote ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub author_id: String,
    pub category_id: String,
    pub published_at: DateTime<Utc>,
    pub read_time: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub body: String,
}

/// An entry the content store accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEntry {
    pub id: String,
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl PublishedEntry {
    pub fn new(id: impl Into<String>, slug: Option<String>, title: Option<String>) -> Self {
        Self {
            id: id.into(),
            slug,
            title,
        }
    }
}

/// Resolves a raw `publishedAt` value to a UTC timestamp.
///
/// Accepted forms:
/// - RFC 3339 (`2025-03-15T10:00:00Z`, `2025-03-15T10:00:00+02:00`)
/// - date and time without offset, read as UTC (`2025-03-15T10:00:00`, `2025-03-15 10:00:00`)
/// - date only, read as midnight UTC (`2025-03-15`)
///
/// An absent value resolves to `now`. Returns `None` for text in any other form.
pub fn resolve_published_at(raw: Option<&str>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let Some(raw) = raw.map(str::trim) else {
        return Some(now);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_absent_published_at_uses_now() {
        assert_eq!(resolve_published_at(None, fixed_now()), Some(fixed_now()));
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let resolved = resolve_published_at(Some("2025-03-15"), fixed_now()).unwrap();
        assert_eq!(resolved.to_rfc3339(), "2025-03-15T00:00:00+00:00");
    }

    #[test]
    fn test_rfc3339_is_converted_to_utc() {
        let resolved = resolve_published_at(Some("2025-03-15T10:00:00+02:00"), fixed_now()).unwrap();
        assert_eq!(resolved, Utc.with_ymd_and_hms(2025, 3, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_is_read_as_utc() {
        let resolved = resolve_published_at(Some("2025-03-15 10:30:00"), fixed_now()).unwrap();
        assert_eq!(resolved, Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(resolve_published_at(Some("last tuesday"), fixed_now()), None);
    }
}
