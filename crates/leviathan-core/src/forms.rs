//! Form validation and simulated submissions.
//!
//! Failures here are user-facing only; the UI shows them as toasts.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::session::{Credentials, SignUpData, SignUpRequest};
use crate::types::Role;

/// Simulated latency of the contact form "API"
pub const CONTACT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please select a role")]
    MissingRole,

    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Sign-in form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        required(&self.email, "Email")?;
        required(&self.password, "Password")?;
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Sign-up form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub organization: String,
    pub role: Option<Role>,
}

impl SignUpForm {
    /// Check the form; password mismatch is reported before a missing role.
    pub fn validate(&self) -> Result<SignUpRequest, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        let role = self.role.ok_or(FormError::MissingRole)?;

        Ok(SignUpRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            data: SignUpData {
                full_name: non_empty(&self.full_name),
                organization: non_empty(&self.organization),
                role: Some(role),
            },
        })
    }
}

/// Topic picked on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactCategory {
    #[default]
    General,
    Research,
    Partnership,
    Technical,
    Media,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 5] = [
        ContactCategory::General,
        ContactCategory::Research,
        ContactCategory::Partnership,
        ContactCategory::Technical,
        ContactCategory::Media,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Research => "research",
            ContactCategory::Partnership => "partnership",
            ContactCategory::Technical => "technical",
            ContactCategory::Media => "media",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Research => "Research Collaboration",
            ContactCategory::Partnership => "Partnership",
            ContactCategory::Technical => "Technical Support",
            ContactCategory::Media => "Media & Press",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<ContactCategory> {
        ContactCategory::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub subject: String,
    pub message: String,
    pub category: ContactCategory,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.name, "Name")?;
        required(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        required(&self.message, "Message")?;
        Ok(())
    }
}

/// Pretend to send a contact message, waiting `delay` first.
pub async fn submit_contact(form: ContactForm, delay: Duration) -> Result<ContactForm, FormError> {
    form.validate()?;
    tokio::time::sleep(delay).await;
    info!(category = form.category.as_str(), subject = %form.subject, "Contact form submitted (demo mode)");
    Ok(form)
}
