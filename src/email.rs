//! Contact form handling. The form is serialized into a server function which
//! forwards it to EmailJS. Success or failure is the only outcome surfaced to
//! the UI; there is no retry and no queue.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::EmptyField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyField("message"));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }
}

/// The three opaque EmailJS identifiers, supplied via environment.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[cfg(feature = "ssr")]
impl EmailConfig {
    pub fn from_env() -> Result<Self, ContactError> {
        let var = |name: &'static str| {
            std::env::var(name).map_err(|_| ContactError::MissingConfig(name))
        };
        Ok(Self {
            service_id: var("EMAILJS_SERVICE_ID")?,
            template_id: var("EMAILJS_TEMPLATE_ID")?,
            public_key: var("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

/// Forward a contact form submission to the EmailJS send endpoint.
#[server]
pub async fn send_contact(form: ContactForm) -> Result<(), ServerFnError> {
    form.validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let config = EmailConfig::from_env().map_err(|e| {
        tracing::error!("contact form misconfigured: {e}");
        ServerFnError::new("email delivery is not configured")
    })?;

    let payload = serde_json::json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.public_key,
        "template_params": {
            "from_name": form.name,
            "from_email": form.email,
            "subject": form.subject,
            "message": form.message,
        },
    });

    let response = reqwest::Client::new()
        .post("https://api.emailjs.com/api/v1.0/email/send")
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!("EmailJS request failed: {e}");
            ServerFnError::new("email delivery failed")
        })?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "EmailJS rejected submission");
        return Err(ServerFnError::new("email delivery failed"));
    }
    tracing::info!(from = %form.email, "contact form forwarded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Freelance Project".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut f = form();
        f.name = "   ".to_string();
        assert_eq!(f.validate(), Err(ContactError::EmptyField("name")));

        let mut f = form();
        f.message = String::new();
        assert_eq!(f.validate(), Err(ContactError::EmptyField("message")));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["plainaddress", "@example.com", "john@"] {
            let mut f = form();
            f.email = bad.to_string();
            assert_eq!(f.validate(), Err(ContactError::InvalidEmail));
        }
    }

    #[test]
    fn subject_may_be_empty() {
        // The subject select always has a value in the UI, but the transport
        // does not depend on it.
        let mut f = form();
        f.subject = String::new();
        assert_eq!(f.validate(), Ok(()));
    }
}
