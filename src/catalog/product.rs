use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A catalog product as persisted by the remote API.
///
/// `id` is immutable once created; `date_revision` is always the release
/// date shifted one calendar year forward (see [`revision_for`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(with = "wire_date")]
    pub date_release: NaiveDate,
    #[serde(with = "wire_date")]
    pub date_revision: NaiveDate,
}

/// The in-progress, not-yet-submitted field values of a product being
/// created or edited. Dates are `None` until the user's input parses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: Option<NaiveDate>,
    pub date_revision: Option<NaiveDate>,
}

impl ProductDraft {
    /// Fresh draft for the add form: empty strings, release date today,
    /// revision date auto-derived.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            date_release: Some(today),
            date_revision: Some(revision_for(today)),
            ..Self::default()
        }
    }

    /// Draft populated from an existing product for the edit form.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release: Some(product.date_release),
            date_revision: Some(product.date_revision),
        }
    }

    /// Finalize the draft into a submittable product.
    ///
    /// Returns `None` while either date is missing; string rules are the
    /// validation engine's job, not this conversion's.
    pub fn build(&self) -> Option<Product> {
        Some(Product {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            date_release: self.date_release?,
            date_revision: self.date_revision?,
        })
    }
}

/// The revision date derived from a release date: same month and day, one
/// year later. A Feb 29 release rolls over to Mar 1, matching how the
/// catalog service's other clients derive it.
pub fn revision_for(release: NaiveDate) -> NaiveDate {
    release.with_year(release.year() + 1).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(release.year() + 1, 3, 1).expect("Mar 1 is always valid")
    })
}

/// Serde adapter for the API's date fields.
///
/// Dates are sent as bare ISO-8601 dates (`YYYY-MM-DD`); responses are
/// additionally tolerated as full RFC 3339 timestamps, which some
/// deployments of the service emit.
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }

    /// Coerce a wire date string into a calendar date.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Some(date);
        }
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn revision_is_one_year_later_same_month_day() {
        let release = date(2026, 8, 6);
        let revision = revision_for(release);
        assert_eq!(revision.year(), release.year() + 1);
        assert_eq!(revision.month(), release.month());
        assert_eq!(revision.day(), release.day());
    }

    #[test]
    fn leap_day_release_rolls_over_to_march_first() {
        assert_eq!(revision_for(date(2028, 2, 29)), date(2029, 3, 1));
    }

    #[test]
    fn wire_date_parses_bare_dates() {
        assert_eq!(wire_date::parse("2026-08-06"), Some(date(2026, 8, 6)));
    }

    #[test]
    fn wire_date_parses_rfc3339_timestamps() {
        assert_eq!(
            wire_date::parse("2026-08-06T00:00:00.000Z"),
            Some(date(2026, 8, 6))
        );
    }

    #[test]
    fn wire_date_rejects_garbage() {
        assert_eq!(wire_date::parse("next tuesday"), None);
    }

    #[test]
    fn product_serializes_dates_as_bare_iso() {
        let product = Product {
            id: "ABC123".to_string(),
            name: "Card Plus".to_string(),
            description: "A credit card with extra benefits".to_string(),
            logo: "logo.png".to_string(),
            date_release: date(2026, 8, 6),
            date_revision: date(2027, 8, 6),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["date_release"], "2026-08-06");
        assert_eq!(json["date_revision"], "2027-08-06");
    }

    #[test]
    fn product_deserializes_timestamp_dates() {
        let json = serde_json::json!({
            "id": "ABC123",
            "name": "Card Plus",
            "description": "A credit card with extra benefits",
            "logo": "logo.png",
            "date_release": "2026-08-06T05:00:00+00:00",
            "date_revision": "2027-08-06",
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.date_release, date(2026, 8, 6));
        assert_eq!(product.date_revision, date(2027, 8, 6));
    }

    #[test]
    fn draft_for_today_derives_revision() {
        let draft = ProductDraft::for_today(date(2026, 1, 15));
        assert_eq!(draft.date_release, Some(date(2026, 1, 15)));
        assert_eq!(draft.date_revision, Some(date(2027, 1, 15)));
        assert!(draft.id.is_empty());
    }

    #[test]
    fn draft_build_requires_both_dates() {
        let mut draft = ProductDraft::for_today(date(2026, 1, 15));
        draft.id = "ABC".to_string();
        assert!(draft.build().is_some());

        draft.date_revision = None;
        assert!(draft.build().is_none());
    }
}
