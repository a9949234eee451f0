//! Login and signup form payloads with their validation rules.

use serde::Deserialize;

use crate::validation::FieldErrors;

/// Submitted login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Checkbox; present (usually `"on"`) when ticked.
    #[serde(default)]
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn remember(&self) -> bool {
        self.remember.is_some()
    }

    /// Trimmed, lower-cased email used for lookup.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = self.normalized_email();
        if errors.required("email", "Email", &email) {
            errors.length("email", "Email", &email, 4, 50);
        }
        if errors.required("password", "Password", &self.password) {
            errors.length("password", "Password", &self.password, 8, 80);
        }
        errors.into_result()
    }
}

/// Submitted signup form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = self.normalized_email();
        if errors.required("email", "Email", &email) {
            errors.email("email", &email);
            errors.length("email", "Email", &email, 0, 50);
        }

        let username = self.normalized_username();
        if errors.required("username", "Username", &username) {
            errors.length("username", "Username", &username, 4, 32);
        }

        if errors.required("password", "Password", &self.password) {
            errors.length("password", "Password", &self.password, 8, 80);
        }

        errors.into_result()
    }
}
