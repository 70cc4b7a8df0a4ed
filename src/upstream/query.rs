//! Inbound query parsing and upstream query resolution.

use chrono::{Local, NaiveDate};
use url::form_urlencoded;

/// Date format the upstream API accepts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters accepted on `/api/fixtures`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixturesQuery {
    pub date: Option<String>,
    pub status: Option<String>,
}

impl FixturesQuery {
    /// Parse a raw (still percent-encoded) query string.
    ///
    /// When a key repeats, the first occurrence wins. Unknown keys are ignored.
    pub fn from_query_string(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                "date" => &mut query.date,
                "status" => &mut query.status,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }

    /// Resolve into the upstream query, defaulting `date` to `today`.
    ///
    /// Only a missing `date` gets the default; `date=` is forwarded as-is.
    /// An empty `status` is dropped.
    pub fn resolve(self, today: NaiveDate) -> UpstreamQuery {
        let date = self
            .date
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
        let status = self.status.filter(|status| !status.is_empty());

        UpstreamQuery { date, status }
    }
}

/// Query sent to `<base>/fixtures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    /// Always present.
    pub date: String,
    /// Present only when the caller supplied a non-empty value.
    pub status: Option<String>,
}

impl UpstreamQuery {
    /// Key/value pairs in upstream order: `date` first, then `status`.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        std::iter::once(("date", self.date.as_str()))
            .chain(self.status.as_deref().map(|status| ("status", status)))
    }
}

/// Today's date in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let query = FixturesQuery::from_query_string(None).resolve(may_first());

        assert_eq!(query.date, "2024-05-01");
        assert_eq!(query.status, None);
    }

    #[test]
    fn supplied_date_is_kept_verbatim() {
        let query =
            FixturesQuery::from_query_string(Some("date=2023-01-01")).resolve(may_first());
        assert_eq!(query.date, "2023-01-01");

        // No format validation: whatever the caller sends goes upstream.
        let query = FixturesQuery::from_query_string(Some("date=tomorrow")).resolve(may_first());
        assert_eq!(query.date, "tomorrow");
    }

    #[test]
    fn empty_date_is_forwarded_and_empty_status_dropped() {
        let query =
            FixturesQuery::from_query_string(Some("date=&status=")).resolve(may_first());

        assert_eq!(query.date, "");
        assert_eq!(query.status, None);

        let pairs: Vec<_> = FixturesQuery::from_query_string(Some("date=&status=NS"))
            .resolve(may_first())
            .pairs()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        assert_eq!(pairs, vec![("date", String::new()), ("status", "NS".to_string())]);
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_are_ignored() {
        let parsed =
            FixturesQuery::from_query_string(Some("league=39&status=NS&status=FT&date=2024-01-02"));

        assert_eq!(
            parsed,
            FixturesQuery {
                date: Some("2024-01-02".into()),
                status: Some("NS".into()),
            }
        );
    }

    #[test]
    fn values_are_percent_decoded() {
        let parsed = FixturesQuery::from_query_string(Some("status=1H%2DHT"));
        assert_eq!(parsed.status.as_deref(), Some("1H-HT"));
    }

    #[test]
    fn pairs_put_date_before_status() {
        let query = UpstreamQuery {
            date: "2023-01-01".into(),
            status: Some("FT".into()),
        };
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(pairs, vec![("date", "2023-01-01"), ("status", "FT")]);

        let query = UpstreamQuery {
            date: "2023-01-01".into(),
            status: None,
        };
        assert_eq!(query.pairs().count(), 1);
    }
}
