//! Login and signup form models with per-field validation. Screens call the
//! single-field validators on every change and `validate` on submit; a form
//! with any error is never sent.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

/// Minimum password length for both password fields.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum display-name length on signup.
pub const MIN_NAME_LENGTH: usize = 3;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// DOM id of the field's input.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm-password",
        }
    }
}

/// Error messages grouped by field, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Replaces a field's messages; an empty list clears the field.
    pub fn set(&mut self, field: FormField, messages: Vec<String>) {
        if messages.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, messages);
        }
    }

    pub fn get(&self, field: FormField) -> &[String] {
        self.fields.get(&field).map_or(&[], Vec::as_slice)
    }

    pub fn has(&self, field: FormField) -> bool {
        !self.get(field).is_empty()
    }

    /// Messages for one field joined for inline display.
    pub fn message(&self, field: FormField) -> Option<String> {
        let messages = self.get(field);
        (!messages.is_empty()).then(|| messages.join(", "))
    }
}

#[derive(Clone, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: normalize_email(email.into()),
            password: SecretString::from(password.into()),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.set(FormField::Email, validate_email(&self.email));
        errors.set(
            FormField::Password,
            validate_password(self.password.expose_secret()),
        );
        errors
    }
}

#[derive(Clone, Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: normalize_email(email.into()),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.set(FormField::Name, validate_name(&self.name));
        errors.set(FormField::Email, validate_email(&self.email));
        errors.set(
            FormField::Password,
            validate_password(self.password.expose_secret()),
        );
        errors.set(
            FormField::ConfirmPassword,
            validate_confirm_password(
                self.password.expose_secret(),
                self.confirm_password.expose_secret(),
            ),
        );
        errors
    }
}

/// Basic email format check.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

pub fn validate_email(email: &str) -> Vec<String> {
    if valid_email(email) {
        Vec::new()
    } else {
        vec![INVALID_EMAIL.to_string()]
    }
}

pub fn validate_password(password: &str) -> Vec<String> {
    if char_len(password) < MIN_PASSWORD_LENGTH {
        vec![PASSWORD_TOO_SHORT.to_string()]
    } else {
        Vec::new()
    }
}

pub fn validate_name(name: &str) -> Vec<String> {
    if char_len(name) < MIN_NAME_LENGTH {
        vec![NAME_TOO_SHORT.to_string()]
    } else {
        Vec::new()
    }
}

/// Checks length and equality against the password as it is right now; both
/// problems are reported together.
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Vec<String> {
    let mut errors = validate_password(confirm_password);
    if confirm_password != password {
        errors.push(PASSWORDS_DONT_MATCH.to_string());
    }
    errors
}

/// Surrounding whitespace is dropped before the email is validated or sent.
fn normalize_email(email: String) -> String {
    email.trim().to_string()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_malformed_values() {
        assert!(!valid_email(""));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@c.com"));
        assert!(!valid_email("@b.com"));
        assert!(!valid_email("a@@b.com"));
    }

    #[test]
    fn password_needs_eight_characters() {
        assert_eq!(validate_password("abcdefg"), vec![PASSWORD_TOO_SHORT]);
        assert!(validate_password("abcdefgh").is_empty());
        // Counted in characters, not bytes.
        assert_eq!(validate_password("ñññññññ"), vec![PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn name_needs_three_characters() {
        assert_eq!(validate_name("Al"), vec![NAME_TOO_SHORT]);
        assert!(validate_name("Ana").is_empty());
    }

    #[test]
    fn confirm_password_reports_length_and_mismatch() {
        assert_eq!(
            validate_confirm_password("abcdefgh", "abcdefg"),
            vec![PASSWORD_TOO_SHORT, PASSWORDS_DONT_MATCH]
        );
        assert_eq!(
            validate_confirm_password("abcdefgh", "abcdefgi"),
            vec![PASSWORDS_DONT_MATCH]
        );
        assert!(validate_confirm_password("abcdefgh", "abcdefgh").is_empty());
    }

    #[test]
    fn confirm_password_tracks_password_changes() {
        let confirm = "password123";
        assert!(validate_confirm_password("password123", confirm).is_empty());
        assert_eq!(
            validate_confirm_password("password1234", confirm),
            vec![PASSWORDS_DONT_MATCH]
        );
    }

    #[test]
    fn login_form_collects_errors_per_field() {
        let errors = LoginForm::new("nope", "short").validate();
        assert_eq!(errors.message(FormField::Email).as_deref(), Some(INVALID_EMAIL));
        assert_eq!(
            errors.message(FormField::Password).as_deref(),
            Some(PASSWORD_TOO_SHORT)
        );
        assert!(LoginForm::new("a@b.com", "password123").validate().is_empty());
    }

    #[test]
    fn email_is_trimmed_before_validation() {
        let login = LoginForm::new("  a@b.com\n", "password123");
        assert_eq!(login.email, "a@b.com");
        assert!(login.validate().is_empty());

        let signup = SignupForm::new(" Ann ", " a@b.com ", "abcdefgh", "abcdefgh");
        assert_eq!(signup.email, "a@b.com");
        assert_eq!(signup.name, " Ann ");
        assert!(signup.validate().is_empty());
    }

    #[test]
    fn signup_form_joins_multiple_messages() {
        let errors = SignupForm::new("Ann", "a@b.com", "abcdefgh", "abcdefg").validate();
        assert!(!errors.is_empty());
        assert!(!errors.has(FormField::Name));
        assert!(!errors.has(FormField::Password));
        assert_eq!(
            errors.message(FormField::ConfirmPassword).as_deref(),
            Some("Password must be at least 8 characters, Passwords don't match")
        );
    }

    #[test]
    fn form_errors_set_with_empty_list_clears_field() {
        let mut errors = FormErrors::new();
        errors.push(FormField::Email, INVALID_EMAIL);
        errors.set(FormField::Email, Vec::new());
        assert!(errors.is_empty());
        assert_eq!(errors.message(FormField::Email), None);
    }
}
