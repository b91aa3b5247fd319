use serde::Serialize;

use crate::models::forms::{LoginForm, RegisterForm};

/// Field-level errors for the login form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginFormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFormErrors {
    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Field-level errors for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegistrationFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl RegistrationFormErrors {
    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Checks an address against the `local@domain.tld` shape: no whitespace,
/// exactly one `@`, a nonempty local part, and a domain with an interior
/// dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Please enter a valid email".to_string())
    } else {
        None
    }
}

/// Validates a login form.
///
/// Pure and side-effect free: the same input always yields the same error
/// set, and an empty result means every constraint is satisfied.
///
/// # Arguments
///
/// * `form` - The login form to validate.
///
/// # Returns
///
/// A field-to-message mapping, empty when the form is valid.
pub fn validate_login(form: &LoginForm) -> LoginFormErrors {
    let mut errors = LoginFormErrors::default();

    errors.email = validate_email(&form.email);

    if form.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if form.password.chars().count() < 6 {
        errors.password = Some("Password must be at least 6 characters".to_string());
    }

    errors
}

/// Validates a registration form.
///
/// # Arguments
///
/// * `form` - The registration form to validate.
///
/// # Returns
///
/// A field-to-message mapping, empty when the form is valid.
pub fn validate_registration(form: &RegisterForm) -> RegistrationFormErrors {
    let mut errors = RegistrationFormErrors::default();

    let name_len = form.name.trim().chars().count();
    if name_len == 0 {
        errors.name = Some("Name is required".to_string());
    } else if name_len < 2 {
        errors.name = Some("Name must be at least 2 characters".to_string());
    } else if name_len > 50 {
        errors.name = Some("Name must be less than 50 characters".to_string());
    }

    errors.email = validate_email(&form.email);

    if form.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if form.password.chars().count() < 6 {
        errors.password = Some("Password must be at least 6 characters".to_string());
    } else if !has_required_composition(&form.password) {
        errors.password =
            Some("Password must contain uppercase, lowercase, and number".to_string());
    }

    if form.confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password".to_string());
    } else if form.confirm_password != form.password {
        errors.confirm_password = Some("Passwords do not match".to_string());
    }

    errors
}

/// A password must carry at least one lowercase letter, one uppercase
/// letter, and one digit.
fn has_required_composition(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
