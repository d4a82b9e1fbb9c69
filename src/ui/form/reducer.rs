use crate::catalog::FieldErrors;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{DraftFields, FormInput, FormMode, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenAdd { today } => FormState::Open {
                mode: FormMode::Add,
                fields: DraftFields::for_today(today),
                focused: FormInput::Id,
                errors: FieldErrors::default(),
                id_exists: false,
            },
            FormIntent::OpenEdit { product } => FormState::Open {
                mode: FormMode::Edit,
                fields: DraftFields::from_product(&product),
                // The id is immutable once created; focus starts past it.
                focused: FormInput::Name,
                errors: FieldErrors::default(),
                id_exists: false,
            },
            FormIntent::Close => FormState::Closed,
            FormIntent::FocusNext => move_focus(state, 1),
            FormIntent::FocusPrev => move_focus(state, -1),
            FormIntent::Input(c) => edit_focused(state, |buffer| buffer.push(c)),
            FormIntent::Backspace => edit_focused(state, |buffer| {
                buffer.pop();
            }),
            FormIntent::IdCheckResolved { id, exists } => match state {
                FormState::Open {
                    mode: FormMode::Add,
                    fields,
                    focused,
                    errors,
                    ..
                } if fields.id == id => FormState::Open {
                    mode: FormMode::Add,
                    fields,
                    focused,
                    errors,
                    id_exists: exists,
                },
                other => other,
            },
            FormIntent::Reject { errors } => match state {
                FormState::Open {
                    mode,
                    fields,
                    focused,
                    id_exists,
                    ..
                } => FormState::Open {
                    mode,
                    fields,
                    focused,
                    errors,
                    id_exists,
                },
                FormState::Closed => FormState::Closed,
            },
        }
    }
}

fn move_focus(state: FormState, step: isize) -> FormState {
    match state {
        FormState::Open {
            mode,
            fields,
            focused,
            errors,
            id_exists,
        } => {
            let order = editable_inputs(mode);
            let current = order.iter().position(|input| *input == focused).unwrap_or(0);
            let next = (current as isize + step).rem_euclid(order.len() as isize) as usize;
            FormState::Open {
                mode,
                fields,
                focused: order[next],
                errors,
                id_exists,
            }
        }
        closed => closed,
    }
}

fn edit_focused(state: FormState, edit: impl FnOnce(&mut String)) -> FormState {
    match state {
        FormState::Open {
            mode,
            mut fields,
            focused,
            errors,
            id_exists,
        } => {
            // The id cannot change in edit mode; focus never lands on it
            // there, but a stray intent must not mutate it either.
            if mode == FormMode::Edit && focused == FormInput::Id {
                return FormState::Open {
                    mode,
                    fields,
                    focused,
                    errors,
                    id_exists,
                };
            }

            edit(fields.buffer_mut(focused));
            if focused == FormInput::DateRelease {
                fields.derive_revision();
            }

            FormState::Open {
                mode,
                fields,
                focused,
                errors,
                id_exists,
            }
        }
        closed => closed,
    }
}

fn editable_inputs(mode: FormMode) -> &'static [FormInput] {
    const EDIT_ORDER: &[FormInput] = &[
        FormInput::Name,
        FormInput::Description,
        FormInput::Logo,
        FormInput::DateRelease,
    ];
    match mode {
        FormMode::Add => &FormInput::ORDER,
        FormMode::Edit => EDIT_ORDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::catalog::{revision_for, validate, Field, Product};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn open_add() -> FormState {
        FormReducer::reduce(FormState::Closed, FormIntent::OpenAdd { today: today() })
    }

    fn sample_product() -> Product {
        Product {
            id: "ABC123".to_string(),
            name: "Card Plus".to_string(),
            description: "A credit card with extra benefits".to_string(),
            logo: "logo.png".to_string(),
            date_release: today(),
            date_revision: revision_for(today()),
        }
    }

    fn type_str(mut state: FormState, text: &str) -> FormState {
        for c in text.chars() {
            state = FormReducer::reduce(state, FormIntent::Input(c));
        }
        state
    }

    #[test]
    fn open_add_seeds_dates_and_clears_flags() {
        let state = open_add();
        let FormState::Open {
            mode,
            fields,
            focused,
            errors,
            id_exists,
        } = state
        else {
            panic!("expected Open");
        };
        assert_eq!(mode, FormMode::Add);
        assert_eq!(focused, FormInput::Id);
        assert!(fields.id.is_empty());
        assert_eq!(fields.date_release, "2026-08-06");
        assert_eq!(fields.date_revision, "2027-08-06");
        assert!(errors.is_empty());
        assert!(!id_exists);
    }

    #[test]
    fn open_edit_populates_from_product() {
        let state = FormReducer::reduce(
            FormState::Closed,
            FormIntent::OpenEdit {
                product: sample_product(),
            },
        );
        let FormState::Open {
            mode,
            fields,
            focused,
            ..
        } = state
        else {
            panic!("expected Open");
        };
        assert_eq!(mode, FormMode::Edit);
        assert_eq!(focused, FormInput::Name);
        assert_eq!(fields.id, "ABC123");
        assert_eq!(fields.name, "Card Plus");
    }

    #[test]
    fn close_on_closed_is_a_noop() {
        let state = FormReducer::reduce(FormState::Closed, FormIntent::Close);
        assert_eq!(state, FormState::Closed);
    }

    #[test]
    fn typing_edits_the_focused_buffer() {
        let state = type_str(open_add(), "ABC");
        let FormState::Open { fields, .. } = &state else {
            panic!("expected Open");
        };
        assert_eq!(fields.id, "ABC");

        let state = FormReducer::reduce(state, FormIntent::Backspace);
        let FormState::Open { fields, .. } = state else {
            panic!("expected Open");
        };
        assert_eq!(fields.id, "AB");
    }

    #[test]
    fn editing_release_date_rederives_revision() {
        let mut state = open_add();
        // Move focus to the release date input.
        for _ in 0..4 {
            state = FormReducer::reduce(state, FormIntent::FocusNext);
        }
        // Clear the seeded value, then type a new date.
        for _ in 0..10 {
            state = FormReducer::reduce(state, FormIntent::Backspace);
        }
        let state = type_str(state, "2026-12-31");
        let FormState::Open { fields, .. } = &state else {
            panic!("expected Open");
        };
        assert_eq!(fields.date_release, "2026-12-31");
        assert_eq!(fields.date_revision, "2027-12-31");
    }

    #[test]
    fn partial_release_date_clears_revision() {
        let mut state = open_add();
        for _ in 0..4 {
            state = FormReducer::reduce(state, FormIntent::FocusNext);
        }
        let state = FormReducer::reduce(state, FormIntent::Backspace);
        let FormState::Open { fields, .. } = state else {
            panic!("expected Open");
        };
        assert_eq!(fields.date_release, "2026-08-0");
        assert!(fields.date_revision.is_empty());
    }

    #[test]
    fn focus_wraps_and_skips_id_in_edit_mode() {
        let mut state = FormReducer::reduce(
            FormState::Closed,
            FormIntent::OpenEdit {
                product: sample_product(),
            },
        );
        state = FormReducer::reduce(state, FormIntent::FocusPrev);
        let FormState::Open { focused, .. } = &state else {
            panic!("expected Open");
        };
        assert_eq!(*focused, FormInput::DateRelease);

        state = FormReducer::reduce(state, FormIntent::FocusNext);
        let FormState::Open { focused, .. } = state else {
            panic!("expected Open");
        };
        assert_eq!(focused, FormInput::Name);
    }

    #[test]
    fn id_check_applies_to_matching_id() {
        let state = type_str(open_add(), "ABC");
        let state = FormReducer::reduce(
            state,
            FormIntent::IdCheckResolved {
                id: "ABC".to_string(),
                exists: true,
            },
        );
        let FormState::Open { id_exists, .. } = state else {
            panic!("expected Open");
        };
        assert!(id_exists);
    }

    #[test]
    fn stale_id_check_is_dropped() {
        // User typed "ABC", a check went out, then they kept typing.
        let state = type_str(open_add(), "ABCD");
        let state = FormReducer::reduce(
            state,
            FormIntent::IdCheckResolved {
                id: "ABC".to_string(),
                exists: true,
            },
        );
        let FormState::Open { id_exists, .. } = state else {
            panic!("expected Open");
        };
        assert!(!id_exists);
    }

    #[test]
    fn reject_surfaces_errors_and_stays_open() {
        let state = open_add();
        let draft = match &state {
            FormState::Open { fields, .. } => fields.to_draft(),
            FormState::Closed => unreachable!(),
        };
        let errors = validate(&draft, false, false, today());
        assert!(!errors.is_empty());

        let state = FormReducer::reduce(state, FormIntent::Reject { errors });
        let FormState::Open { errors, .. } = &state else {
            panic!("expected Open");
        };
        assert!(errors.get(Field::Id).is_some());
        assert!(state.is_open());
    }

    #[test]
    fn auto_derived_pair_passes_cross_field_validation() {
        let state = type_str(open_add(), "ABC123");
        let FormState::Open { fields, .. } = &state else {
            panic!("expected Open");
        };
        let draft = fields.to_draft();
        let errors = validate(&draft, false, false, today());
        assert_eq!(errors.get(Field::DateRelease), None);
        assert_eq!(errors.get(Field::DateRevision), None);
    }
}
