//! Form validation rules.
//!
//! A stateless pass over a [`ProductDraft`]: synchronous field rules, one
//! cross-field date rule, and the previously-resolved id-uniqueness flag.
//! Per field, the first failing rule wins; a draft is submittable exactly
//! when the returned map is empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::{revision_for, ProductDraft};

/// The validatable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Description => "description",
            Field::Logo => "logo",
            Field::DateRelease => "date_release",
            Field::DateRevision => "date_revision",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Logo => "Logo",
            Field::DateRelease => "Release date",
            Field::DateRevision => "Revision date",
        }
    }
}

/// Field → message map produced by [`validate`]. Empty means submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    map: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.map.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.map.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn set(&mut self, field: Field, message: impl Into<String>) {
        self.map.insert(field, message.into());
    }
}

/// Validate a draft against the field and cross-field rules.
///
/// `id_exists` is the most recently resolved uniqueness flag (refreshed
/// asynchronously while the user types); it only applies when creating,
/// since the id is immutable in edit mode. `today` is the calendar date the
/// release-date floor is checked against.
pub fn validate(
    draft: &ProductDraft,
    is_edit: bool,
    id_exists: bool,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.id.is_empty() {
        errors.set(Field::Id, "ID is required");
    } else if draft.id.chars().count() < 3 {
        errors.set(Field::Id, "ID must be at least 3 characters");
    } else if draft.id.chars().count() > 10 {
        errors.set(Field::Id, "ID must be at most 10 characters");
    } else if !is_edit && id_exists {
        errors.set(Field::Id, "ID already exists");
    }

    if draft.name.is_empty() {
        errors.set(Field::Name, "Name is required");
    } else if draft.name.chars().count() < 5 {
        errors.set(Field::Name, "Name must be at least 5 characters");
    } else if draft.name.chars().count() > 10 {
        errors.set(Field::Name, "Name must be at most 10 characters");
    }

    if draft.description.is_empty() {
        errors.set(Field::Description, "Description is required");
    } else if draft.description.chars().count() < 10 {
        errors.set(Field::Description, "Description must be at least 10 characters");
    } else if draft.description.chars().count() > 200 {
        errors.set(Field::Description, "Description must be at most 200 characters");
    }

    if draft.logo.is_empty() {
        errors.set(Field::Logo, "Logo is required");
    }

    match draft.date_release {
        None => errors.set(Field::DateRelease, "Release date is required"),
        Some(release) if release < today => {
            errors.set(Field::DateRelease, "Release date must be today or a future date");
        }
        Some(_) => {}
    }

    match draft.date_revision {
        None => errors.set(Field::DateRevision, "Revision date is required"),
        Some(revision) => {
            if let Some(release) = draft.date_release {
                if revision != revision_for(release) {
                    errors.set(
                        Field::DateRevision,
                        "Revision date must be exactly one year after the release date",
                    );
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            id: "ABC123".to_string(),
            name: "Card Plus".to_string(),
            description: "A credit card with extra benefits".to_string(),
            logo: "https://cdn.example.com/card.png".to_string(),
            date_release: Some(today()),
            date_revision: Some(revision_for(today())),
        }
    }

    #[test]
    fn valid_draft_produces_empty_map() {
        let errors = validate(&valid_draft(), false, false, today());
        assert!(errors.is_empty());
    }

    #[test]
    fn field_keys_match_the_record_fields() {
        let keys: Vec<&str> = validate(&ProductDraft::default(), false, false, today())
            .iter()
            .map(|(field, _)| field.as_str())
            .collect();
        assert_eq!(
            keys,
            vec!["id", "name", "description", "logo", "date_release", "date_revision"]
        );
    }

    #[test]
    fn empty_draft_flags_every_field() {
        let draft = ProductDraft::default();
        let errors = validate(&draft, false, false, today());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Id), Some("ID is required"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Logo), Some("Logo is required"));
    }

    #[test]
    fn past_release_date_mentions_future() {
        let mut draft = valid_draft();
        draft.date_release = Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        draft.date_revision = Some(revision_for(draft.date_release.unwrap()));

        let errors = validate(&draft, false, false, today());
        assert!(errors.get(Field::DateRelease).unwrap().contains("future"));
    }

    #[test]
    fn release_today_is_accepted() {
        let errors = validate(&valid_draft(), false, false, today());
        assert_eq!(errors.get(Field::DateRelease), None);
    }

    #[test]
    fn id_rules_short_circuit_in_order() {
        let mut draft = valid_draft();

        draft.id = "ab".to_string();
        let errors = validate(&draft, false, true, today());
        assert_eq!(errors.get(Field::Id), Some("ID must be at least 3 characters"));

        draft.id = "abcdefghijk".to_string();
        let errors = validate(&draft, false, true, today());
        assert_eq!(errors.get(Field::Id), Some("ID must be at most 10 characters"));

        draft.id = "ABC123".to_string();
        let errors = validate(&draft, false, true, today());
        assert_eq!(errors.get(Field::Id), Some("ID already exists"));
    }

    #[test]
    fn edit_mode_skips_uniqueness() {
        let errors = validate(&valid_draft(), true, true, today());
        assert!(errors.is_empty());
    }

    #[test]
    fn name_length_bounds() {
        let mut draft = valid_draft();

        draft.name = "Card".to_string();
        let errors = validate(&draft, false, false, today());
        assert_eq!(errors.get(Field::Name), Some("Name must be at least 5 characters"));

        draft.name = "Card Platinum".to_string();
        let errors = validate(&draft, false, false, today());
        assert_eq!(errors.get(Field::Name), Some("Name must be at most 10 characters"));
    }

    #[test]
    fn description_length_bounds() {
        let mut draft = valid_draft();

        draft.description = "too short".to_string();
        let errors = validate(&draft, false, false, today());
        assert_eq!(
            errors.get(Field::Description),
            Some("Description must be at least 10 characters")
        );

        draft.description = "x".repeat(201);
        let errors = validate(&draft, false, false, today());
        assert_eq!(
            errors.get(Field::Description),
            Some("Description must be at most 200 characters")
        );
    }

    #[test]
    fn mismatched_revision_is_rejected() {
        let mut draft = valid_draft();
        draft.date_revision = Some(NaiveDate::from_ymd_opt(2027, 8, 7).unwrap());

        let errors = validate(&draft, false, false, today());
        assert!(errors.get(Field::DateRevision).is_some());
    }

    #[test]
    fn missing_revision_is_required_not_mismatched() {
        let mut draft = valid_draft();
        draft.date_revision = None;

        let errors = validate(&draft, false, false, today());
        assert_eq!(errors.get(Field::DateRevision), Some("Revision date is required"));
    }
}
