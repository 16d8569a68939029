//! Login form state and validation.
//!
//! [`FormView`] owns the field values, the last computed [`ValidationErrors`]
//! and the submitted flag. Before the first submit, edits only update the
//! values. Once a submit has been attempted, every edit re-runs [`validate`].

use serde::{Deserialize, Serialize, Serializer};

/// Minimum password length, counted in UTF-16 code units as a browser does.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A field of the login form together with its DOM wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// Form field name, as posted.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Field::Email => "login-email",
            Field::Password => "login-password",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Email => "login-email-error",
            Field::Password => "login-password-error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email or Username",
            Field::Password => "Password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "text",
            Field::Password => "password",
        }
    }

    /// Autocomplete hint for password managers
    pub fn autocomplete(self) -> &'static str {
        match self {
            Field::Email => "username",
            Field::Password => "current-password",
        }
    }
}

/// Current values of the two inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl FormState {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// A rejected field. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your email or username.")]
    EmailRequired,
    #[error("Please enter your password.")]
    PasswordRequired,
    #[error("Password must be at least {} characters.", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-field errors. Serializes as an object holding only the failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Names of the failing fields, for logging.
    pub fn fields(&self) -> Vec<&'static str> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .map(Field::name)
            .collect()
    }
}

/// Check both fields of `state`.
pub fn validate(state: &FormState) -> ValidationErrors {
    let email = if state.email.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else {
        None
    };

    let password = if state.password.trim().is_empty() {
        Some(FieldError::PasswordRequired)
    } else if state.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        Some(FieldError::PasswordTooShort)
    } else {
        None
    };

    ValidationErrors { email, password }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Both fields passed; the caller shows the acknowledgment.
    Accepted,
    Rejected(ValidationErrors),
}

#[derive(Debug, Clone, Default)]
pub struct FormView {
    state: FormState,
    errors: ValidationErrors,
    submitted: bool,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a view from values and a submitted flag carried across requests.
    /// A submitted view gets its errors recomputed right away.
    pub fn restore(state: FormState, submitted: bool) -> Self {
        let errors = if submitted {
            validate(&state)
        } else {
            ValidationErrors::default()
        };
        Self {
            state,
            errors,
            submitted,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Field edit. Re-validates only after the first submit.
    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        *self.state.value_mut(field) = value.into();
        if self.submitted {
            self.errors = validate(&self.state);
        }
    }

    pub fn on_submit(&mut self) -> Submission {
        self.errors = validate(&self.state);
        self.submitted = true;

        if self.errors.is_empty() {
            Submission::Accepted
        } else {
            Submission::Rejected(self.errors.clone())
        }
    }
}
