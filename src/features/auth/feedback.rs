//! Per-field error display state for the auth forms.
//!
//! Validation errors appear once a field has been edited or a submit was
//! attempted. Errors returned by a submission stick to their field until the
//! user edits it again.

use super::forms::{FormErrors, FormField};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FormFeedback {
    validation: Memo<FormErrors>,
    touched: RwSignal<Vec<FormField>>,
    submitted: RwSignal<FormErrors>,
}

impl FormFeedback {
    /// `validation` re-runs whenever any field it reads changes.
    pub fn new(validation: Memo<FormErrors>) -> Self {
        Self {
            validation,
            touched: RwSignal::new(Vec::new()),
            submitted: RwSignal::new(FormErrors::new()),
        }
    }

    /// Message to show under `field`, if any.
    pub fn error(self, field: FormField) -> Signal<Option<String>> {
        Signal::derive(move || {
            self.submitted
                .with(|errors| errors.message(field))
                .or_else(|| {
                    self.touched
                        .with(|touched| touched.contains(&field))
                        .then(|| self.validation.with(|errors| errors.message(field)))
                        .flatten()
                })
        })
    }

    pub fn edited(self, field: FormField) {
        self.touched.update(|touched| {
            if !touched.contains(&field) {
                touched.push(field);
            }
        });
        self.submitted.update(|errors| errors.set(field, Vec::new()));
    }

    /// Marks every field touched and reports whether the form may be sent.
    pub fn begin_submit(self, fields: &[FormField]) -> bool {
        self.touched.set(fields.to_vec());
        self.submitted.set(FormErrors::new());
        self.validation.with_untracked(FormErrors::is_empty)
    }

    pub fn show_submitted(self, errors: FormErrors) {
        self.submitted.set(errors);
    }
}

#[cfg(test)]
mod tests {
    use super::FormFeedback;
    use crate::features::auth::forms::{
        FormErrors, FormField, INVALID_EMAIL, LoginForm, PASSWORD_TOO_SHORT,
    };
    use leptos::{prelude::*, reactive::owner::Owner};

    const FIELDS: [FormField; 2] = [FormField::Email, FormField::Password];

    fn login_feedback(email: RwSignal<String>, password: RwSignal<String>) -> FormFeedback {
        FormFeedback::new(Memo::new(move |_| {
            LoginForm::new(email.get(), password.get()).validate()
        }))
    }

    fn shown(feedback: FormFeedback, field: FormField) -> Option<String> {
        feedback.error(field).get_untracked()
    }

    #[test]
    fn errors_stay_hidden_until_the_field_is_edited() {
        Owner::new().with(|| {
            let email = RwSignal::new(String::new());
            let password = RwSignal::new(String::new());
            let feedback = login_feedback(email, password);

            assert_eq!(shown(feedback, FormField::Email), None);
            assert_eq!(shown(feedback, FormField::Password), None);

            email.set("nope".to_string());
            feedback.edited(FormField::Email);
            assert_eq!(shown(feedback, FormField::Email).as_deref(), Some(INVALID_EMAIL));
            assert_eq!(shown(feedback, FormField::Password), None);

            email.set("a@b.com".to_string());
            assert_eq!(shown(feedback, FormField::Email), None);
        });
    }

    #[test]
    fn blocked_submit_marks_every_field_touched() {
        Owner::new().with(|| {
            let email = RwSignal::new("nope".to_string());
            let password = RwSignal::new("short".to_string());
            let feedback = login_feedback(email, password);

            assert!(!feedback.begin_submit(&FIELDS));
            assert_eq!(shown(feedback, FormField::Email).as_deref(), Some(INVALID_EMAIL));
            assert_eq!(
                shown(feedback, FormField::Password).as_deref(),
                Some(PASSWORD_TOO_SHORT)
            );
        });
    }

    #[test]
    fn valid_form_may_be_submitted() {
        Owner::new().with(|| {
            let email = RwSignal::new("a@b.com".to_string());
            let password = RwSignal::new("password123".to_string());
            let feedback = login_feedback(email, password);

            assert!(feedback.begin_submit(&FIELDS));
            assert_eq!(shown(feedback, FormField::Email), None);
        });
    }

    #[test]
    fn submitted_errors_stick_until_the_field_is_edited() {
        Owner::new().with(|| {
            let email = RwSignal::new("a@b.com".to_string());
            let password = RwSignal::new("password123".to_string());
            let feedback = login_feedback(email, password);
            assert!(feedback.begin_submit(&FIELDS));

            let mut errors = FormErrors::new();
            errors.push(FormField::Email, "Invalid email or password");
            feedback.show_submitted(errors);
            assert_eq!(
                shown(feedback, FormField::Email).as_deref(),
                Some("Invalid email or password")
            );

            feedback.edited(FormField::Email);
            assert_eq!(shown(feedback, FormField::Email), None);
        });
    }
}
