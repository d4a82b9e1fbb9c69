use chrono::NaiveDate;

use crate::catalog::{revision_for, Field, FieldErrors, Product, ProductDraft};
use crate::ui::mvi::UiState;

/// Display and entry format for the two date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// The editable inputs, in focus order. The revision date is not listed:
/// it is derived from the release date and never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
}

impl FormInput {
    pub const ORDER: [FormInput; 5] = [
        FormInput::Id,
        FormInput::Name,
        FormInput::Description,
        FormInput::Logo,
        FormInput::DateRelease,
    ];

    /// The validation field this input feeds.
    pub fn field(&self) -> Field {
        match self {
            FormInput::Id => Field::Id,
            FormInput::Name => Field::Name,
            FormInput::Description => Field::Description,
            FormInput::Logo => Field::Logo,
            FormInput::DateRelease => Field::DateRelease,
        }
    }
}

/// Text buffers backing the form inputs, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftFields {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl DraftFields {
    /// Buffers for a fresh add form: empty strings, dates seeded with
    /// today and the derived revision.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            date_release: today.format(DATE_FORMAT).to_string(),
            date_revision: revision_for(today).format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Buffers populated from an existing product for the edit form.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release: product.date_release.format(DATE_FORMAT).to_string(),
            date_revision: product.date_revision.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parse the buffers into a typed draft. Date buffers that don't parse
    /// become `None`, which the validation engine reports as missing.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            date_release: parse_date(&self.date_release),
            date_revision: parse_date(&self.date_revision),
        }
    }

    pub fn buffer(&self, input: FormInput) -> &str {
        match input {
            FormInput::Id => &self.id,
            FormInput::Name => &self.name,
            FormInput::Description => &self.description,
            FormInput::Logo => &self.logo,
            FormInput::DateRelease => &self.date_release,
        }
    }

    pub(super) fn buffer_mut(&mut self, input: FormInput) -> &mut String {
        match input {
            FormInput::Id => &mut self.id,
            FormInput::Name => &mut self.name,
            FormInput::Description => &mut self.description,
            FormInput::Logo => &mut self.logo,
            FormInput::DateRelease => &mut self.date_release,
        }
    }

    /// Overwrite the revision buffer with the date derived from the
    /// release buffer, or clear it while the release input doesn't parse.
    pub(super) fn derive_revision(&mut self) {
        self.date_revision = match parse_date(&self.date_release) {
            Some(release) => revision_for(release).format(DATE_FORMAT).to_string(),
            None => String::new(),
        };
    }
}

pub(super) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// The form state machine: closed, or open in add/edit mode with the
/// draft buffers, the last validation result, and the most recently
/// resolved id-uniqueness flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        fields: DraftFields,
        focused: FormInput,
        errors: FieldErrors,
        id_exists: bool,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Open {
                mode: FormMode::Edit,
                ..
            }
        )
    }
}
